//! Builder-flow state: an explicit, serializable draft plus a bounded
//! step pointer. Every mutation is an in-memory transformation; nothing
//! touches storage until the whole draft is submitted in one create call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 8;

/// Working copy of every invitation field. All fields are optional at
/// entry; groom/bride names are only enforced socially, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvitationDraft {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
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
    #[serde(default)]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub akad_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub akad_time: String,
    #[serde(default)]
    pub reception_time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub venue_address: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub story: String,
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
}

/// Text-field selector for `InvitationDraft::set`. Date and coordinate
/// fields parse their value; an unparsable or empty value clears them,
/// mirroring how the form treats blank inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Slug,
    TemplateId,
    GroomName,
    BrideName,
    GroomPhoto,
    BridePhoto,
    CoverPhoto,
    GroomFather,
    GroomMother,
    BrideFather,
    BrideMother,
    EventDate,
    AkadDate,
    AkadTime,
    ReceptionTime,
    Venue,
    VenueAddress,
    Lat,
    Lng,
    Story,
    MusicUrl,
    BankName,
    BankAccount,
    BankHolder,
    QrisImage,
}

impl InvitationDraft {
    pub fn set(&mut self, field: DraftField, value: &str) {
        use DraftField::*;
        match field {
            Slug => self.slug = non_empty(value),
            TemplateId => self.template_id = non_empty(value),
            GroomName => self.groom_name = value.to_string(),
            BrideName => self.bride_name = value.to_string(),
            GroomPhoto => self.groom_photo = value.to_string(),
            BridePhoto => self.bride_photo = value.to_string(),
            CoverPhoto => self.cover_photo = value.to_string(),
            GroomFather => self.groom_father = value.to_string(),
            GroomMother => self.groom_mother = value.to_string(),
            BrideFather => self.bride_father = value.to_string(),
            BrideMother => self.bride_mother = value.to_string(),
            EventDate => self.event_date = parse_date(value),
            AkadDate => self.akad_date = parse_date(value),
            AkadTime => self.akad_time = value.to_string(),
            ReceptionTime => self.reception_time = value.to_string(),
            Venue => self.venue = value.to_string(),
            VenueAddress => self.venue_address = value.to_string(),
            Lat => self.lat = value.trim().parse().ok(),
            Lng => self.lng = value.trim().parse().ok(),
            Story => self.story = value.to_string(),
            MusicUrl => self.music_url = value.to_string(),
            BankName => self.bank_name = value.to_string(),
            BankAccount => self.bank_account = value.to_string(),
            BankHolder => self.bank_holder = value.to_string(),
            QrisImage => self.qris_image = value.to_string(),
        }
    }

    pub fn add_gallery_photo(&mut self, url: impl Into<String>) {
        self.gallery_photos.push(url.into());
    }

    /// Out-of-range indices are ignored; order of the rest is preserved.
    pub fn remove_gallery_photo(&mut self, index: usize) -> Option<String> {
        if index < self.gallery_photos.len() {
            Some(self.gallery_photos.remove(index))
        } else {
            None
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Draft plus the step pointer for the eight builder sections. Navigation
/// is free and non-linear; there is no per-step validation gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderFlow {
    pub draft: InvitationDraft,
    step: u8,
}

impl BuilderFlow {
    pub fn new(draft: InvitationDraft) -> Self {
        Self {
            draft,
            step: FIRST_STEP,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn goto(&mut self, step: u8) {
        self.step = step.clamp(FIRST_STEP, LAST_STEP);
    }

    pub fn next(&mut self) {
        self.goto(self.step.saturating_add(1));
    }

    pub fn back(&mut self) {
        self.goto(self.step.saturating_sub(1));
    }
}

impl Default for BuilderFlow {
    fn default() -> Self {
        Self::new(InvitationDraft::default())
    }
}
