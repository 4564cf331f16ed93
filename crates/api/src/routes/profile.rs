use axum::{Json, extract::State};
use bson::doc;
use serde::{Deserialize, Serialize};

use crate::routes::auth::{UserResponse, user_response};
use crate::{error::ApiError, extractors::auth::AuthUser, state::AppState};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub invitation_count: u64,
    pub created_at: String,
}

pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state.users.base.find_by_id(auth.user_id).await?;
    let invitation_count = state
        .invitations
        .base
        .count(doc! { "user_id": auth.user_id })
        .await?;
    let created_at = crate::routes::invitation::rfc3339(user.created_at);

    Ok(Json(ProfileResponse {
        user: user_response(user),
        invitation_count,
        created_at,
    }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // A bare photo change needs no name/email; anything else does.
    let photo_only = body.profile_image.is_some()
        && body.name.is_none()
        && body.email.is_none()
        && body.current_password.is_none()
        && body.new_password.is_none();

    if photo_only {
        state
            .users
            .update_profile(auth.user_id, None, None, body.profile_image)
            .await?;
        return Ok(Json(serde_json::json!({ "message": "Profile photo updated" })));
    }

    let name = body
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Name and email are required".to_string()))?;
    let email = body
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Name and email are required".to_string()))?;

    if email != auth.email
        && state.users.email_taken_by_other(&email, auth.user_id).await?
    {
        return Err(ApiError::BadRequest("Email is already in use".to_string()));
    }

    if let Some(new_password) = body.new_password {
        let current = body.current_password.ok_or_else(|| {
            ApiError::BadRequest("Current password is required".to_string())
        })?;

        let user = state.users.base.find_by_id(auth.user_id).await?;
        let hash = user
            .password_hash
            .as_ref()
            .ok_or_else(|| ApiError::BadRequest("No password set".to_string()))?;

        if !state.auth.verify_password(&current, hash)? {
            return Err(ApiError::BadRequest("Current password is wrong".to_string()));
        }
        if new_password.len() < 6 {
            return Err(ApiError::BadRequest(
                "New password must be at least 6 characters".to_string(),
            ));
        }

        let new_hash = state.auth.hash_password(&new_password)?;
        state.users.update_password(auth.user_id, new_hash).await?;
    }

    state
        .users
        .update_profile(auth.user_id, Some(name), Some(email), body.profile_image)
        .await?;

    Ok(Json(serde_json::json!({ "message": "Profile updated" })))
}
