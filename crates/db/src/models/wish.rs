use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Guestbook entry. Append-only; the same guest may leave any number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wish {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub invitation_id: ObjectId,
    pub guest_name: String,
    pub message: String,
    pub created_at: DateTime,
}

impl Wish {
    pub const COLLECTION: &'static str = "wishes";
}
