use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A single wedding-invitation page, draft or published.
///
/// `slug` is assigned once at creation and never re-derived, even when
/// the couple's names are edited later. `view_count` only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub slug: String,
    pub template_id: String,
    #[serde(default)]
    pub groom_name: String,
    #[serde(default)]
    pub bride_name: String,
    #[serde(default)]
    pub groom_photo: String,
    #[serde(default)]
    pub bride_photo: String,
    #[serde(default)]
    pub cover_photo: String,
    #[serde(default)]
    pub groom_father: String,
    #[serde(default)]
    pub groom_mother: String,
    #[serde(default)]
    pub bride_father: String,
    #[serde(default)]
    pub bride_mother: String,
    pub event_date: Option<DateTime>,
    pub akad_date: Option<DateTime>,
    #[serde(default)]
    pub akad_time: String,
    #[serde(default)]
    pub reception_time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub venue_address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default)]
    pub story: String,
    // Ordered gallery; the BSON array encoding is a persistence concern,
    // domain code only ever sees the Vec.
    #[serde(default)]
    pub gallery_photos: Vec<String>,
    #[serde(default)]
    pub music_url: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub bank_account: String,
    #[serde(default)]
    pub bank_holder: String,
    #[serde(default)]
    pub qris_image: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub view_count: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Invitation {
    pub const COLLECTION: &'static str = "invitations";
}
