use bson::{DateTime, doc, oid::ObjectId};
use chrono::Utc;
use mongodb::Database;
use tracing::debug;
use undangan_db::models::{Invitation, UserRole};

use super::base::{BaseDao, DaoError, DaoResult};
use super::guest::GuestDao;
use super::wish::WishDao;
use crate::draft::InvitationDraft;
use crate::{slug, templates};

pub struct InvitationDao {
    pub base: BaseDao<Invitation>,
}

/// Partial update for an owned invitation. `None` leaves a field
/// untouched; the slug is deliberately absent — it never changes after
/// creation, even when the couple's names do.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct InvitationPatch {
    pub template_id: Option<String>,
    pub groom_name: Option<String>,
    pub bride_name: Option<String>,
    pub groom_photo: Option<String>,
    pub bride_photo: Option<String>,
    pub cover_photo: Option<String>,
    pub groom_father: Option<String>,
    pub groom_mother: Option<String>,
    pub bride_father: Option<String>,
    pub bride_mother: Option<String>,
    pub event_date: Option<chrono::DateTime<Utc>>,
    pub akad_date: Option<chrono::DateTime<Utc>>,
    pub akad_time: Option<String>,
    pub reception_time: Option<String>,
    pub venue: Option<String>,
    pub venue_address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub story: Option<String>,
    pub gallery_photos: Option<Vec<String>>,
    pub music_url: Option<String>,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
    pub bank_holder: Option<String>,
    pub qris_image: Option<String>,
    pub is_published: Option<bool>,
}

impl InvitationDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Invitation::COLLECTION),
        }
    }

    /// One atomic create for the whole draft: the slug is allocated, the
    /// entity inserted, and nothing is written if the insert fails.
    pub async fn create(
        &self,
        user_id: ObjectId,
        draft: InvitationDraft,
        publish: bool,
    ) -> DaoResult<Invitation> {
        let slug = self
            .allocate_slug(
                &draft.groom_name,
                &draft.bride_name,
                draft.slug.as_deref(),
            )
            .await?;

        let now = DateTime::now();
        let invitation = Invitation {
            id: None,
            user_id,
            slug,
            template_id: draft
                .template_id
                .unwrap_or_else(|| templates::DEFAULT_TEMPLATE.to_string()),
            groom_name: draft.groom_name,
            bride_name: draft.bride_name,
            groom_photo: draft.groom_photo,
            bride_photo: draft.bride_photo,
            cover_photo: draft.cover_photo,
            groom_father: draft.groom_father,
            groom_mother: draft.groom_mother,
            bride_father: draft.bride_father,
            bride_mother: draft.bride_mother,
            event_date: draft.event_date.map(DateTime::from_chrono),
            akad_date: draft.akad_date.map(DateTime::from_chrono),
            akad_time: draft.akad_time,
            reception_time: draft.reception_time,
            venue: draft.venue,
            venue_address: draft.venue_address,
            lat: draft.lat,
            lng: draft.lng,
            story: draft.story,
            gallery_photos: draft.gallery_photos,
            music_url: draft.music_url,
            bank_name: draft.bank_name,
            bank_account: draft.bank_account,
            bank_holder: draft.bank_holder,
            qris_image: draft.qris_image,
            is_published: publish,
            view_count: 0,
            created_at: now,
            updated_at: now,
        };

        let id = self.base.insert_one(&invitation).await?;
        debug!(%id, slug = %invitation.slug, "Created invitation");
        self.base.find_by_id(id).await
    }

    /// Check-then-suffix allocation. The existence check and the later
    /// insert are two operations; the unique index on `slug` is the
    /// backstop for the window between them.
    pub async fn allocate_slug(
        &self,
        groom_name: &str,
        bride_name: &str,
        custom: Option<&str>,
    ) -> DaoResult<String> {
        let proposed = slug::propose(groom_name, bride_name, custom);

        let taken = self
            .base
            .find_one(doc! { "slug": &proposed })
            .await?
            .is_some();

        Ok(if taken {
            slug::disambiguate(&proposed)
        } else {
            proposed
        })
    }

    /// The one owner-or-admin predicate for every owner-scoped operation.
    /// Non-owners get NotFound, never Forbidden, so existence is not
    /// leaked.
    pub async fn find_managed(
        &self,
        id: ObjectId,
        user_id: ObjectId,
        role: UserRole,
    ) -> DaoResult<Invitation> {
        let filter = match role {
            UserRole::Admin => doc! { "_id": id },
            UserRole::User => doc! { "_id": id, "user_id": user_id },
        };
        self.base.find_one(filter).await?.ok_or(DaoError::NotFound)
    }

    pub async fn find_by_user(&self, user_id: ObjectId) -> DaoResult<Vec<Invitation>> {
        self.base
            .find_many(
                doc! { "user_id": user_id },
                Some(doc! { "created_at": -1 }),
            )
            .await
    }

    pub async fn update(&self, id: ObjectId, patch: InvitationPatch) -> DaoResult<Invitation> {
        let mut set = bson::Document::new();

        macro_rules! put {
            ($field:ident) => {
                if let Some(v) = patch.$field {
                    set.insert(stringify!($field), v);
                }
            };
        }
        put!(template_id);
        put!(groom_name);
        put!(bride_name);
        put!(groom_photo);
        put!(bride_photo);
        put!(cover_photo);
        put!(groom_father);
        put!(groom_mother);
        put!(bride_father);
        put!(bride_mother);
        put!(akad_time);
        put!(reception_time);
        put!(venue);
        put!(venue_address);
        put!(lat);
        put!(lng);
        put!(story);
        put!(music_url);
        put!(bank_name);
        put!(bank_account);
        put!(bank_holder);
        put!(qris_image);
        put!(is_published);
        if let Some(date) = patch.event_date {
            set.insert("event_date", DateTime::from_chrono(date));
        }
        if let Some(date) = patch.akad_date {
            set.insert("akad_date", DateTime::from_chrono(date));
        }
        if let Some(photos) = patch.gallery_photos {
            set.insert("gallery_photos", photos);
        }

        if !set.is_empty() {
            self.base.update_by_id(id, doc! { "$set": set }).await?;
        }

        self.base.find_by_id(id).await
    }

    /// Deleting an invitation takes its guests and wishes with it.
    pub async fn delete_cascade(
        &self,
        guests: &GuestDao,
        wishes: &WishDao,
        id: ObjectId,
    ) -> DaoResult<()> {
        guests.base.hard_delete(doc! { "invitation_id": id }).await?;
        wishes.base.hard_delete(doc! { "invitation_id": id }).await?;
        let deleted = self.base.hard_delete(doc! { "_id": id }).await?;
        if deleted == 0 {
            return Err(DaoError::NotFound);
        }
        debug!(%id, "Deleted invitation with guests and wishes");
        Ok(())
    }

    /// Public resolution: absent and unpublished look identical.
    pub async fn find_published_by_slug(&self, slug: &str) -> DaoResult<Invitation> {
        self.base
            .find_one(doc! { "slug": slug, "is_published": true })
            .await?
            .ok_or(DaoError::NotFound)
    }

    /// Every successful public view counts, with no visitor dedup. Raw
    /// `$inc` on the collection so a page view does not touch
    /// `updated_at`.
    pub async fn increment_view_count(&self, id: ObjectId) -> DaoResult<()> {
        self.base
            .collection()
            .update_one(doc! { "_id": id }, doc! { "$inc": { "view_count": 1 } })
            .await?;
        Ok(())
    }
}
