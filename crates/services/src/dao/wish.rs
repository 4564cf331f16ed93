use bson::{DateTime, doc, oid::ObjectId};
use mongodb::Database;
use undangan_db::models::Wish;

use super::base::{BaseDao, DaoError, DaoResult};

/// Wishes shown on the public page are capped at the 50 most recent.
pub const PUBLIC_WISH_LIMIT: i64 = 50;
/// The standalone wishes listing returns up to 100.
pub const LIST_WISH_LIMIT: i64 = 100;

pub struct WishDao {
    pub base: BaseDao<Wish>,
}

impl WishDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Wish::COLLECTION),
        }
    }

    /// Append-only: no dedup, no upsert. The same guest may leave any
    /// number of distinct wishes.
    pub async fn create(
        &self,
        invitation_id: ObjectId,
        guest_name: String,
        message: String,
    ) -> DaoResult<Wish> {
        if guest_name.trim().is_empty() || message.trim().is_empty() {
            return Err(DaoError::Validation(
                "Guest name and message are required".to_string(),
            ));
        }

        let wish = Wish {
            id: None,
            invitation_id,
            guest_name,
            message,
            created_at: DateTime::now(),
        };

        let id = self.base.insert_one(&wish).await?;
        self.base.find_by_id(id).await
    }

    /// Newest first.
    pub async fn find_recent(
        &self,
        invitation_id: ObjectId,
        limit: i64,
    ) -> DaoResult<Vec<Wish>> {
        self.base
            .find_many_limited(
                doc! { "invitation_id": invitation_id },
                doc! { "created_at": -1 },
                limit,
            )
            .await
    }

    pub async fn count_for_invitation(&self, invitation_id: ObjectId) -> DaoResult<u64> {
        self.base.count(doc! { "invitation_id": invitation_id }).await
    }
}
