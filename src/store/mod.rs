#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::invitation::{Invitation, RsvpStatus};

/// Fields the service assigns before the store persists a record.
/// Timestamps are set by the store on write.
#[derive(Debug, Clone)]
pub struct NewInvitation {
    pub id: Uuid,
    pub name: String,
    pub event_date: DateTime<Utc>,
    pub venue: String,
    pub status: RsvpStatus,
    pub plus_one: i32,
    pub qr_code: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct InvitationChanges {
    pub name: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub status: Option<RsvpStatus>,
    pub plus_one: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCounts {
    pub total: i64,
    pub confirmed: i64,
    pub pending: i64,
    pub declined: i64,
}

#[async_trait]
pub trait InvitationStore: Send + Sync {
    async fn create(&self, new: NewInvitation) -> Result<Invitation, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<Invitation>, AppError>;

    /// All invitations, newest first.
    async fn list(&self) -> Result<Vec<Invitation>, AppError>;

    /// Merges `changes` into the record and bumps `updated_at`.
    /// Returns `None` when the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        changes: InvitationChanges,
    ) -> Result<Option<Invitation>, AppError>;

    /// Hard delete. Returns `false` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    async fn status_counts(&self) -> Result<StatusCounts, AppError>;

    /// Most recently updated invitations, newest first.
    async fn recently_updated(&self, limit: i64) -> Result<Vec<Invitation>, AppError>;
}
