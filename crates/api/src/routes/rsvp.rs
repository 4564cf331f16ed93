use axum::{Json, extract::State};
use serde::Deserialize;
use validator::Validate;

use crate::routes::invitation::{GuestResponse, guest_response, parse_id};
use crate::{error::ApiError, state::AppState};
use undangan_db::models::RsvpStatus;

/// Deliberately unauthenticated and indifferent to published state: any
/// caller who knows a valid invitation id may respond, so owners can
/// exercise the flow before publishing.
#[derive(Debug, Deserialize, Validate)]
pub struct RsvpRequest {
    pub invitation_id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub rsvp_status: Option<RsvpStatus>,
    pub rsvp_count: Option<i32>,
    pub phone: Option<String>,
    pub group: Option<String>,
}

pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<RsvpRequest>,
) -> Result<Json<GuestResponse>, ApiError> {
    body.validate()?;

    let invitation_id = parse_id(&body.invitation_id)?;

    // Existence check is the only gate.
    state
        .invitations
        .base
        .find_by_id(invitation_id)
        .await
        .map_err(|_| ApiError::NotFound("Invitation not found".to_string()))?;

    let guest = state
        .guests
        .upsert_rsvp(
            invitation_id,
            body.name.trim(),
            body.rsvp_status.unwrap_or(RsvpStatus::Attending),
            body.rsvp_count.unwrap_or(1),
            body.phone,
            body.group,
        )
        .await?;

    Ok(Json(guest_response(guest)))
}
