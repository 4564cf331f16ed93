use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::routes::invitation::{InvitationResponse, WishResponse, to_response, wish_response};
use crate::{error::ApiError, state::AppState};
use undangan_db::models::Plan;
use undangan_services::dao::wish::PUBLIC_WISH_LIMIT;

#[derive(Debug, Deserialize)]
pub struct PublicQuery {
    /// Personalizes the greeting; purely cosmetic, echoed back as-is.
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PublicInvitationView {
    pub invitation: InvitationResponse,
    pub wishes: Vec<WishResponse>,
    pub guest_name: String,
    pub is_free_plan: bool,
}

/// Resolves a slug to the guest-facing view. Unpublished invitations are
/// indistinguishable from nonexistent ones. Every successful resolution
/// counts a view; the increment is committed before wishes are loaded so
/// it sticks even if the rest of the assembly fails.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PublicQuery>,
) -> Result<Json<PublicInvitationView>, ApiError> {
    let invitation = state.invitations.find_published_by_slug(&slug).await?;
    let invitation_id = invitation
        .id
        .ok_or_else(|| ApiError::Internal("Missing _id".to_string()))?;

    state.invitations.increment_view_count(invitation_id).await?;

    let wishes = state
        .wishes
        .find_recent(invitation_id, PUBLIC_WISH_LIMIT)
        .await?;

    let owner = state.users.base.find_by_id(invitation.user_id).await?;

    Ok(Json(PublicInvitationView {
        invitation: to_response(invitation),
        wishes: wishes.into_iter().map(wish_response).collect(),
        guest_name: query.to.unwrap_or_default(),
        is_free_plan: owner.plan == Plan::Free,
    }))
}
