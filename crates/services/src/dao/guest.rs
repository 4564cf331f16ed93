use bson::{DateTime, doc, oid::ObjectId};
use mongodb::Database;
use undangan_db::models::{Guest, RsvpStatus};

use super::base::{BaseDao, DaoError, DaoResult};

pub struct GuestDao {
    pub base: BaseDao<Guest>,
}

impl GuestDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Guest::COLLECTION),
        }
    }

    /// Last-write-wins RSVP keyed on (invitation_id, name): one atomic
    /// find-or-create, so a repeat submission overwrites status and count
    /// instead of growing a second row. Re-submitting an identical
    /// payload is idempotent.
    pub async fn upsert_rsvp(
        &self,
        invitation_id: ObjectId,
        name: &str,
        rsvp_status: RsvpStatus,
        rsvp_count: i32,
        phone: Option<String>,
        group: Option<String>,
    ) -> DaoResult<Guest> {
        if name.trim().is_empty() {
            return Err(DaoError::Validation("Guest name is required".to_string()));
        }
        if rsvp_count < 1 {
            return Err(DaoError::Validation(
                "RSVP count must be at least 1".to_string(),
            ));
        }

        let now = DateTime::now();
        let mut set = doc! {
            "rsvp_status": bson::to_bson(&rsvp_status)?,
            "rsvp_count": rsvp_count,
            "updated_at": now,
        };
        if let Some(phone) = phone {
            set.insert("phone", phone);
        }
        if let Some(group) = group {
            set.insert("group", group);
        }

        let guest = self
            .base
            .find_one_and_update(
                doc! { "invitation_id": invitation_id, "name": name },
                doc! {
                    "$set": set,
                    "$setOnInsert": {
                        "invitation_id": invitation_id,
                        "name": name,
                        "created_at": now,
                    },
                },
                true,
            )
            .await?;

        guest.ok_or(DaoError::NotFound)
    }

    pub async fn find_by_invitation(&self, invitation_id: ObjectId) -> DaoResult<Vec<Guest>> {
        self.base
            .find_many(
                doc! { "invitation_id": invitation_id },
                Some(doc! { "created_at": -1 }),
            )
            .await
    }

    pub async fn count_for_invitation(&self, invitation_id: ObjectId) -> DaoResult<u64> {
        self.base.count(doc! { "invitation_id": invitation_id }).await
    }

    pub async fn count_attending(&self, invitation_id: ObjectId) -> DaoResult<u64> {
        self.base
            .count(doc! {
                "invitation_id": invitation_id,
                "rsvp_status": bson::to_bson(&RsvpStatus::Attending)?,
            })
            .await
    }
}
