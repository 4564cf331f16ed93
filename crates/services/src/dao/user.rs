use bson::{DateTime, doc, oid::ObjectId};
use mongodb::Database;
use undangan_db::models::{Plan, User, UserRole};

use super::base::{BaseDao, DaoError, DaoResult};

pub struct UserDao {
    pub base: BaseDao<User>,
}

impl UserDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, User::COLLECTION),
        }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> DaoResult<User> {
        let now = DateTime::now();
        let user = User {
            id: None,
            name,
            email,
            password_hash: Some(password_hash),
            profile_image: None,
            role: UserRole::User,
            plan: Plan::Free,
            created_at: now,
            updated_at: now,
        };

        let id = self.base.insert_one(&user).await?;
        self.base.find_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<User> {
        self.base
            .find_one(doc! { "email": email })
            .await?
            .ok_or(DaoError::NotFound)
    }

    pub async fn email_taken_by_other(&self, email: &str, user_id: ObjectId) -> DaoResult<bool> {
        let count = self
            .base
            .count(doc! { "email": email, "_id": { "$ne": user_id } })
            .await?;
        Ok(count > 0)
    }

    pub async fn update_profile(
        &self,
        user_id: ObjectId,
        name: Option<String>,
        email: Option<String>,
        profile_image: Option<String>,
    ) -> DaoResult<bool> {
        let mut update = bson::Document::new();
        if let Some(name) = name {
            update.insert("name", name);
        }
        if let Some(email) = email {
            update.insert("email", email);
        }
        if let Some(image) = profile_image {
            update.insert("profile_image", image);
        }

        if update.is_empty() {
            return Ok(false);
        }

        self.base
            .update_by_id(user_id, doc! { "$set": update })
            .await
    }

    pub async fn update_password(
        &self,
        user_id: ObjectId,
        password_hash: String,
    ) -> DaoResult<bool> {
        self.base
            .update_by_id(user_id, doc! { "$set": { "password_hash": password_hash } })
            .await
    }

    /// Admin mutation of plan and/or role; returns the updated user.
    pub async fn set_plan_and_role(
        &self,
        user_id: ObjectId,
        plan: Option<Plan>,
        role: Option<UserRole>,
    ) -> DaoResult<User> {
        let mut update = bson::Document::new();
        if let Some(plan) = plan {
            update.insert("plan", bson::to_bson(&plan)?);
        }
        if let Some(role) = role {
            update.insert("role", bson::to_bson(&role)?);
        }

        if !update.is_empty() {
            self.base
                .update_by_id(user_id, doc! { "$set": update })
                .await?;
        }

        self.base.find_by_id(user_id).await
    }

    pub async fn list_all(&self) -> DaoResult<Vec<User>> {
        self.base
            .find_many(doc! {}, Some(doc! { "created_at": -1 }))
            .await
    }
}
