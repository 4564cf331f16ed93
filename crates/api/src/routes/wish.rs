use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use validator::Validate;

use crate::routes::invitation::{WishResponse, parse_id, wish_response};
use crate::{error::ApiError, state::AppState};
use undangan_services::dao::wish::LIST_WISH_LIMIT;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub invitation_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<WishResponse>>, ApiError> {
    let raw = query
        .invitation_id
        .ok_or_else(|| ApiError::BadRequest("invitation_id is required".to_string()))?;
    let invitation_id = parse_id(&raw)?;

    let wishes = state
        .wishes
        .find_recent(invitation_id, LIST_WISH_LIMIT)
        .await?;

    Ok(Json(wishes.into_iter().map(wish_response).collect()))
}

#[derive(Debug, Deserialize, Validate)]
pub struct WishRequest {
    pub invitation_id: String,
    #[validate(length(min = 1, message = "Guest name is required"))]
    pub guest_name: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<WishRequest>,
) -> Result<(StatusCode, Json<WishResponse>), ApiError> {
    body.validate()?;

    let invitation_id = parse_id(&body.invitation_id)?;

    state
        .invitations
        .base
        .find_by_id(invitation_id)
        .await
        .map_err(|_| ApiError::NotFound("Invitation not found".to_string()))?;

    let wish = state
        .wishes
        .create(invitation_id, body.guest_name, body.message)
        .await?;

    Ok((StatusCode::CREATED, Json(wish_response(wish))))
}
