use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;
use crate::models::invitation::{
    AdminMetrics, CreateInvitationRequest, Invitation, RsvpStatus, StatusUpdate,
    UpdateInvitationRequest,
};
use crate::qr;
use crate::store::{InvitationChanges, InvitationStore, NewInvitation};

/// How many entries the admin activity feed shows.
pub const RECENT_UPDATES_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct InvitationService {
    store: Arc<dyn InvitationStore>,
    base_url: String,
    transition_guard: bool,
}

impl InvitationService {
    pub fn new(store: Arc<dyn InvitationStore>, config: &Config) -> Self {
        Self {
            store,
            base_url: config.base_url.clone(),
            transition_guard: config.rsvp_transition_guard,
        }
    }

    pub async fn create(&self, req: CreateInvitationRequest) -> Result<Invitation, AppError> {
        let name = req.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
        let venue = req.venue.as_deref().map(str::trim).filter(|v| !v.is_empty());

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if req.event_date.is_none() {
            missing.push("eventDate");
        }
        if venue.is_none() {
            missing.push("venue");
        }

        let (name, event_date, venue) = match (name, req.event_date, venue) {
            (Some(name), Some(event_date), Some(venue)) => {
                (name.to_string(), event_date, venue.to_string())
            }
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Missing required fields: {}",
                    missing.join(", ")
                )));
            }
        };

        let plus_one = req.plus_one.unwrap_or(0);
        if plus_one < 0 {
            return Err(AppError::BadRequest("plusOne must not be negative".into()));
        }

        // The QR code encodes the guest link, so the id is assigned up front.
        let id = Uuid::new_v4();
        let qr_code = qr::invitation_qr(&self.base_url, id)?;

        self.store
            .create(NewInvitation {
                id,
                name,
                event_date,
                venue,
                status: req.status.unwrap_or(RsvpStatus::Pending),
                plus_one,
                qr_code,
            })
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<Invitation, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<Invitation>, AppError> {
        self.store.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: UpdateInvitationRequest,
    ) -> Result<Invitation, AppError> {
        if matches!(&req.name, Some(name) if name.trim().is_empty()) {
            return Err(AppError::BadRequest("name must not be empty".into()));
        }
        if matches!(&req.venue, Some(venue) if venue.trim().is_empty()) {
            return Err(AppError::BadRequest("venue must not be empty".into()));
        }
        if matches!(req.plus_one, Some(plus_one) if plus_one < 0) {
            return Err(AppError::BadRequest("plusOne must not be negative".into()));
        }

        self.store
            .update(
                id,
                InvitationChanges {
                    name: req.name,
                    event_date: req.event_date,
                    venue: req.venue,
                    status: req.status,
                    plus_one: req.plus_one,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".into()))
    }

    pub async fn set_status(&self, id: Uuid, status: RsvpStatus) -> Result<Invitation, AppError> {
        if self.transition_guard {
            let current = self.get(id).await?;
            if !current.status.can_transition_to(status) {
                return Err(AppError::Conflict(format!(
                    "Cannot change RSVP status from {} to {}",
                    current.status.as_str(),
                    status.as_str()
                )));
            }
        }

        self.store
            .update(
                id,
                InvitationChanges {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".into()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.store.delete(id).await
    }

    pub async fn metrics(&self) -> Result<AdminMetrics, AppError> {
        let counts = self.store.status_counts().await?;

        Ok(AdminMetrics {
            total_invitations: counts.total,
            confirmed_rsvps: counts.confirmed,
            pending_rsvps: counts.pending,
            declined_rsvps: counts.declined,
            attendance_rate: attendance_rate(counts.confirmed, counts.total),
        })
    }

    pub async fn recent_status_updates(&self, limit: i64) -> Result<Vec<StatusUpdate>, AppError> {
        let recent = self.store.recently_updated(limit).await?;

        Ok(recent
            .into_iter()
            .map(|inv| StatusUpdate {
                id: inv.id,
                name: inv.name,
                status: inv.status,
                timestamp: inv.updated_at,
            })
            .collect())
    }
}

fn attendance_rate(confirmed: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    ((confirmed as f64 / total as f64) * 100.0).round() as i64
}
