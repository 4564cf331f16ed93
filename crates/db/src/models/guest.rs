use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// One RSVP response. At most one row exists per (invitation_id, name);
/// a repeat submission overwrites status and count in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub invitation_id: ObjectId,
    pub name: String,
    pub phone: Option<String>,
    pub group: Option<String>,
    #[serde(default)]
    pub rsvp_status: RsvpStatus,
    #[serde(default = "default_rsvp_count")]
    pub rsvp_count: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsvpStatus {
    #[default]
    Attending,
    NotAttending,
    Pending,
    Maybe,
}

fn default_rsvp_count() -> i32 {
    1
}

impl Guest {
    pub const COLLECTION: &'static str = "guests";
}
