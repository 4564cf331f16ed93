use axum::{
    Json,
    extract::{Path, State},
};
use bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::routes::auth::{UserResponse, user_response};
use crate::{error::ApiError, extractors::auth::AuthUser, state::AppState};
use undangan_db::models::{Plan, User, UserRole};

/// Role is read from the user row on every call rather than trusted from
/// the token, so a demotion takes effect immediately.
async fn require_admin(state: &AppState, auth: &AuthUser) -> Result<User, ApiError> {
    let user = state.users.base.find_by_id(auth.user_id).await?;
    if user.role != UserRole::Admin {
        return Err(ApiError::Forbidden("Admin access required".to_string()));
    }
    Ok(user)
}

#[derive(Debug, Serialize)]
pub struct AdminUserResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub invitation_count: u64,
    pub created_at: String,
}

async fn admin_user_response(
    state: &AppState,
    user: User,
) -> Result<AdminUserResponse, ApiError> {
    let id = user.id.ok_or(ApiError::Internal("Missing _id".to_string()))?;
    let invitation_count = state
        .invitations
        .base
        .count(doc! { "user_id": id })
        .await?;
    let created_at = crate::routes::invitation::rfc3339(user.created_at);
    Ok(AdminUserResponse {
        user: user_response(user),
        invitation_count,
        created_at,
    })
}

pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AdminUserResponse>>, ApiError> {
    require_admin(&state, &auth).await?;

    let users = state.users.list_all().await?;
    let mut response = Vec::with_capacity(users.len());
    for user in users {
        response.push(admin_user_response(&state, user).await?);
    }

    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub plan: Option<Plan>,
    pub role: Option<UserRole>,
}

pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<AdminUserResponse>, ApiError> {
    require_admin(&state, &auth).await?;

    let id = ObjectId::parse_str(&user_id)
        .map_err(|_| ApiError::BadRequest("Invalid user_id".to_string()))?;

    // Admins cannot change their own role.
    if id == auth.user_id && matches!(body.role, Some(role) if role != UserRole::Admin) {
        return Err(ApiError::BadRequest(
            "Cannot change your own role".to_string(),
        ));
    }

    let user = state
        .users
        .set_plan_and_role(id, body.plan, body.role)
        .await?;

    Ok(Json(admin_user_response(&state, user).await?))
}
