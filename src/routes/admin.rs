use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::AppState;
use crate::error::AppError;
use crate::models::invitation::{AdminMetrics, InvitationTableEntry, StatusUpdate};
use crate::service::RECENT_UPDATES_LIMIT;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin", get(admin_dashboard))
        .route("/api/admin/status", get(recent_status_updates))
}

#[derive(Debug, Serialize)]
struct AdminDashboardResponse {
    metrics: AdminMetrics,
    invitations: Vec<InvitationTableEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusUpdatesResponse {
    status_updates: Vec<StatusUpdate>,
}

async fn admin_dashboard(
    State(state): State<AppState>,
) -> Result<Json<AdminDashboardResponse>, AppError> {
    let metrics = state.service.metrics().await?;
    let invitations = state
        .service
        .list()
        .await?
        .into_iter()
        .map(InvitationTableEntry::from)
        .collect();

    Ok(Json(AdminDashboardResponse {
        metrics,
        invitations,
    }))
}

async fn recent_status_updates(
    State(state): State<AppState>,
) -> Result<Json<StatusUpdatesResponse>, AppError> {
    let status_updates = state
        .service
        .recent_status_updates(RECENT_UPDATES_LIMIT)
        .await?;

    Ok(Json(StatusUpdatesResponse { status_updates }))
}
