use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{InvitationChanges, InvitationStore, NewInvitation, StatusCounts};
use crate::error::AppError;
use crate::models::invitation::{Invitation, RsvpStatus};

/// Test double for the Postgres store; timestamps come from `Utc::now()`.
#[derive(Default)]
pub struct MemoryInvitationStore {
    invitations: RwLock<HashMap<Uuid, Invitation>>,
}

impl MemoryInvitationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvitationStore for MemoryInvitationStore {
    async fn create(&self, new: NewInvitation) -> Result<Invitation, AppError> {
        let now = Utc::now();
        let invitation = Invitation {
            id: new.id,
            name: new.name,
            event_date: new.event_date,
            venue: new.venue,
            status: new.status,
            plus_one: new.plus_one,
            qr_code: new.qr_code,
            created_at: now,
            updated_at: now,
        };

        self.invitations
            .write()
            .await
            .insert(invitation.id, invitation.clone());

        Ok(invitation)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Invitation>, AppError> {
        Ok(self.invitations.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Invitation>, AppError> {
        let mut invitations: Vec<Invitation> =
            self.invitations.read().await.values().cloned().collect();
        invitations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(invitations)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: InvitationChanges,
    ) -> Result<Option<Invitation>, AppError> {
        let mut invitations = self.invitations.write().await;
        let Some(invitation) = invitations.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            invitation.name = name;
        }
        if let Some(event_date) = changes.event_date {
            invitation.event_date = event_date;
        }
        if let Some(venue) = changes.venue {
            invitation.venue = venue;
        }
        if let Some(status) = changes.status {
            invitation.status = status;
        }
        if let Some(plus_one) = changes.plus_one {
            invitation.plus_one = plus_one;
        }
        invitation.updated_at = Utc::now();

        Ok(Some(invitation.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.invitations.write().await.remove(&id).is_some())
    }

    async fn status_counts(&self) -> Result<StatusCounts, AppError> {
        let invitations = self.invitations.read().await;
        let count_of = |status: RsvpStatus| {
            invitations.values().filter(|i| i.status == status).count() as i64
        };

        Ok(StatusCounts {
            total: invitations.len() as i64,
            confirmed: count_of(RsvpStatus::Confirmed),
            pending: count_of(RsvpStatus::Pending),
            declined: count_of(RsvpStatus::Declined),
        })
    }

    async fn recently_updated(&self, limit: i64) -> Result<Vec<Invitation>, AppError> {
        let mut invitations: Vec<Invitation> =
            self.invitations.read().await.values().cloned().collect();
        invitations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        invitations.truncate(limit as usize);
        Ok(invitations)
    }
}
