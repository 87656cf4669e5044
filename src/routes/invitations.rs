use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;
use crate::models::invitation::{
    CreateInvitationRequest, Invitation, RsvpRequest, UpdateInvitationRequest,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/invitations",
            get(list_invitations).post(create_invitation),
        )
        .route(
            "/api/invitations/{id}",
            get(get_invitation)
                .put(update_invitation)
                .patch(update_rsvp_status)
                .delete(delete_invitation),
        )
}

#[derive(Debug, Serialize)]
struct InvitationListResponse {
    invitations: Vec<Invitation>,
}

#[derive(Debug, Serialize)]
struct InvitationResponse {
    invitation: Invitation,
}

async fn list_invitations(
    State(state): State<AppState>,
) -> Result<Json<InvitationListResponse>, AppError> {
    let invitations = state.service.list().await?;
    Ok(Json(InvitationListResponse { invitations }))
}

async fn create_invitation(
    State(state): State<AppState>,
    Json(body): Json<CreateInvitationRequest>,
) -> Result<(StatusCode, Json<InvitationResponse>), AppError> {
    let invitation = state.service.create(body).await?;
    Ok((StatusCode::CREATED, Json(InvitationResponse { invitation })))
}

async fn get_invitation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvitationResponse>, AppError> {
    let invitation = state.service.get(id).await?;
    Ok(Json(InvitationResponse { invitation }))
}

async fn update_invitation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateInvitationRequest>,
) -> Result<Json<InvitationResponse>, AppError> {
    let invitation = state.service.update(id, body).await?;
    Ok(Json(InvitationResponse { invitation }))
}

async fn update_rsvp_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RsvpRequest>,
) -> Result<Json<InvitationResponse>, AppError> {
    let status = body
        .status
        .ok_or_else(|| AppError::BadRequest("RSVP status is required".into()))?;

    let invitation = state.service.set_status(id, status).await?;
    Ok(Json(InvitationResponse { invitation }))
}

async fn delete_invitation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.service.delete(id).await? {
        return Err(AppError::NotFound("Invitation not found".into()));
    }

    Ok(Json(json!({ "message": "Invitation deleted successfully" })))
}
