use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, extractors::auth::AuthUser, state::AppState};
use undangan_db::models::{Guest, Invitation, Wish};
use undangan_services::dao::invitation::InvitationPatch;
use undangan_services::draft::InvitationDraft;

#[derive(Debug, Deserialize)]
pub struct CreateInvitationRequest {
    #[serde(flatten)]
    pub draft: InvitationDraft,
    #[serde(default)]
    pub is_published: bool,
}

/// Guest-facing and owner-facing serialization of an invitation. All
/// datetimes go out as RFC 3339 text.
#[derive(Debug, Serialize)]
pub struct InvitationResponse {
    pub id: String,
    pub user_id: String,
    pub slug: String,
    pub template_id: String,
    pub groom_name: String,
    pub bride_name: String,
    pub groom_photo: String,
    pub bride_photo: String,
    pub cover_photo: String,
    pub groom_father: String,
    pub groom_mother: String,
    pub bride_father: String,
    pub bride_mother: String,
    pub event_date: Option<String>,
    pub akad_date: Option<String>,
    pub akad_time: String,
    pub reception_time: String,
    pub venue: String,
    pub venue_address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub story: String,
    pub gallery_photos: Vec<String>,
    pub music_url: String,
    pub bank_name: String,
    pub bank_account: String,
    pub bank_holder: String,
    pub qris_image: String,
    pub is_published: bool,
    pub view_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

pub(crate) fn rfc3339(dt: bson::DateTime) -> String {
    dt.try_to_rfc3339_string().unwrap_or_default()
}

pub(crate) fn to_response(inv: Invitation) -> InvitationResponse {
    InvitationResponse {
        id: inv.id.map(|id| id.to_hex()).unwrap_or_default(),
        user_id: inv.user_id.to_hex(),
        slug: inv.slug,
        template_id: inv.template_id,
        groom_name: inv.groom_name,
        bride_name: inv.bride_name,
        groom_photo: inv.groom_photo,
        bride_photo: inv.bride_photo,
        cover_photo: inv.cover_photo,
        groom_father: inv.groom_father,
        groom_mother: inv.groom_mother,
        bride_father: inv.bride_father,
        bride_mother: inv.bride_mother,
        event_date: inv.event_date.map(rfc3339),
        akad_date: inv.akad_date.map(rfc3339),
        akad_time: inv.akad_time,
        reception_time: inv.reception_time,
        venue: inv.venue,
        venue_address: inv.venue_address,
        lat: inv.lat,
        lng: inv.lng,
        story: inv.story,
        gallery_photos: inv.gallery_photos,
        music_url: inv.music_url,
        bank_name: inv.bank_name,
        bank_account: inv.bank_account,
        bank_holder: inv.bank_holder,
        qris_image: inv.qris_image,
        is_published: inv.is_published,
        view_count: inv.view_count,
        created_at: rfc3339(inv.created_at),
        updated_at: rfc3339(inv.updated_at),
    }
}

#[derive(Debug, Serialize)]
pub struct GuestResponse {
    pub id: String,
    pub invitation_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub group: Option<String>,
    pub rsvp_status: String,
    pub rsvp_count: i32,
    pub created_at: String,
    pub updated_at: String,
}

pub(crate) fn guest_response(g: Guest) -> GuestResponse {
    let status = serde_json::to_value(g.rsvp_status)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    GuestResponse {
        id: g.id.map(|id| id.to_hex()).unwrap_or_default(),
        invitation_id: g.invitation_id.to_hex(),
        name: g.name,
        phone: g.phone,
        group: g.group,
        rsvp_status: status,
        rsvp_count: g.rsvp_count,
        created_at: rfc3339(g.created_at),
        updated_at: rfc3339(g.updated_at),
    }
}

#[derive(Debug, Serialize)]
pub struct WishResponse {
    pub id: String,
    pub invitation_id: String,
    pub guest_name: String,
    pub message: String,
    pub created_at: String,
}

pub(crate) fn wish_response(w: Wish) -> WishResponse {
    WishResponse {
        id: w.id.map(|id| id.to_hex()).unwrap_or_default(),
        invitation_id: w.invitation_id.to_hex(),
        guest_name: w.guest_name,
        message: w.message,
        created_at: rfc3339(w.created_at),
    }
}

#[derive(Debug, Serialize)]
pub struct InvitationSummary {
    #[serde(flatten)]
    pub invitation: InvitationResponse,
    pub guest_count: u64,
    pub wish_count: u64,
    pub attending_count: u64,
}

pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<InvitationSummary>>, ApiError> {
    let invitations = state.invitations.find_by_user(auth.user_id).await?;

    let mut summaries = Vec::with_capacity(invitations.len());
    for inv in invitations {
        let id = inv.id.ok_or(ApiError::Internal("Missing _id".to_string()))?;
        let guest_count = state.guests.count_for_invitation(id).await?;
        let attending_count = state.guests.count_attending(id).await?;
        let wish_count = state.wishes.count_for_invitation(id).await?;
        summaries.push(InvitationSummary {
            invitation: to_response(inv),
            guest_count,
            wish_count,
            attending_count,
        });
    }

    Ok(Json(summaries))
}

pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateInvitationRequest>,
) -> Result<(StatusCode, Json<InvitationResponse>), ApiError> {
    let invitation = state
        .invitations
        .create(auth.user_id, body.draft, body.is_published)
        .await?;

    Ok((StatusCode::CREATED, Json(to_response(invitation))))
}

#[derive(Debug, Serialize)]
pub struct InvitationDetail {
    #[serde(flatten)]
    pub invitation: InvitationResponse,
    pub guests: Vec<GuestResponse>,
    pub wishes: Vec<WishResponse>,
    pub guest_count: u64,
    pub wish_count: u64,
}

pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(invitation_id): Path<String>,
) -> Result<Json<InvitationDetail>, ApiError> {
    let id = parse_id(&invitation_id)?;
    let role = state.users.base.find_by_id(auth.user_id).await?.role;
    let invitation = state.invitations.find_managed(id, auth.user_id, role).await?;

    let guests = state.guests.find_by_invitation(id).await?;
    let wishes = state
        .wishes
        .find_recent(id, undangan_services::dao::wish::LIST_WISH_LIMIT)
        .await?;
    let guest_count = guests.len() as u64;
    let wish_count = state.wishes.count_for_invitation(id).await?;

    Ok(Json(InvitationDetail {
        invitation: to_response(invitation),
        guests: guests.into_iter().map(guest_response).collect(),
        wishes: wishes.into_iter().map(wish_response).collect(),
        guest_count,
        wish_count,
    }))
}

pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(invitation_id): Path<String>,
    Json(body): Json<InvitationPatch>,
) -> Result<Json<InvitationResponse>, ApiError> {
    let id = parse_id(&invitation_id)?;
    let role = state.users.base.find_by_id(auth.user_id).await?.role;
    state.invitations.find_managed(id, auth.user_id, role).await?;

    let invitation = state.invitations.update(id, body).await?;
    Ok(Json(to_response(invitation)))
}

pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(invitation_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&invitation_id)?;
    let role = state.users.base.find_by_id(auth.user_id).await?.role;
    state.invitations.find_managed(id, auth.user_id, role).await?;

    state
        .invitations
        .delete_cascade(&state.guests, &state.wishes, id)
        .await?;

    Ok(Json(serde_json::json!({ "message": "Invitation deleted" })))
}

pub(crate) fn parse_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::BadRequest("Invalid invitation_id".to_string()))
}
