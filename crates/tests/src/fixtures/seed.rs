use bson::{doc, oid::ObjectId};
use serde_json::Value;

use super::test_app::TestApp;

/// Auth info for a registered test user.
pub struct SeededUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl TestApp {
    /// Register a user and return their auth info.
    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> SeededUser {
        let resp = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Register request failed");

        assert_eq!(
            resp.status().as_u16(),
            201,
            "Register failed: {}",
            resp.text().await.unwrap_or_default()
        );

        self.login_user(email, password).await
    }

    /// Login a user and return their auth info.
    pub async fn login_user(&self, email: &str, password: &str) -> SeededUser {
        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Login request failed");

        assert!(
            resp.status().is_success(),
            "Login failed: {}",
            resp.text().await.unwrap_or_default()
        );

        let json: Value = resp.json().await.expect("Failed to parse login response");

        SeededUser {
            id: json["user"]["id"].as_str().unwrap().to_string(),
            name: json["user"]["name"].as_str().unwrap().to_string(),
            email: email.to_string(),
            access_token: json["access_token"].as_str().unwrap().to_string(),
            refresh_token: json["refresh_token"].as_str().unwrap().to_string(),
        }
    }

    /// Create an authenticated request with the given token.
    pub fn auth_get(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    pub fn auth_post(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    pub fn auth_put(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .put(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    pub fn auth_delete(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .delete(self.url(path))
            .header("Authorization", format!("Bearer {}", token))
    }

    /// Create an invitation for the given user and return the parsed response.
    pub async fn create_invitation(
        &self,
        token: &str,
        groom_name: &str,
        bride_name: &str,
        published: bool,
    ) -> Value {
        let resp = self
            .auth_post("/api/invitation", token)
            .json(&serde_json::json!({
                "groom_name": groom_name,
                "bride_name": bride_name,
                "is_published": published,
            }))
            .send()
            .await
            .expect("Create invitation failed");

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        assert_eq!(status.as_u16(), 201, "Create invitation failed: {}", body);

        serde_json::from_str(&body).expect("Failed to parse invitation response")
    }

    /// Promote a user to admin via direct DB update, since the first admin
    /// of a deployment is assigned out of band.
    pub async fn make_admin(&self, user_id: &str) {
        let id = ObjectId::parse_str(user_id).unwrap();
        self.db
            .collection::<bson::Document>("users")
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": "ADMIN" } })
            .await
            .expect("Failed to promote user to admin");
    }
}
