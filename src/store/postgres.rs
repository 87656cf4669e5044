use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{InvitationChanges, InvitationStore, NewInvitation, StatusCounts};
use crate::error::AppError;
use crate::models::invitation::Invitation;

const INVITATION_COLUMNS: &str =
    "id, name, event_date, venue, status, plus_one, qr_code, created_at, updated_at";

#[derive(Clone)]
pub struct PgInvitationStore {
    db: PgPool,
}

impl PgInvitationStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvitationStore for PgInvitationStore {
    async fn create(&self, new: NewInvitation) -> Result<Invitation, AppError> {
        let invitation = sqlx::query_as::<_, Invitation>(&format!(
            "INSERT INTO invitations (id, name, event_date, venue, status, plus_one, qr_code)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {INVITATION_COLUMNS}"
        ))
        .bind(new.id)
        .bind(&new.name)
        .bind(new.event_date)
        .bind(&new.venue)
        .bind(new.status)
        .bind(new.plus_one)
        .bind(&new.qr_code)
        .fetch_one(&self.db)
        .await?;

        Ok(invitation)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Invitation>, AppError> {
        let invitation = sqlx::query_as::<_, Invitation>(&format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(invitation)
    }

    async fn list(&self) -> Result<Vec<Invitation>, AppError> {
        let invitations = sqlx::query_as::<_, Invitation>(&format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations ORDER BY created_at DESC"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(invitations)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: InvitationChanges,
    ) -> Result<Option<Invitation>, AppError> {
        let invitation = sqlx::query_as::<_, Invitation>(&format!(
            "UPDATE invitations
             SET name = COALESCE($2, name),
                 event_date = COALESCE($3, event_date),
                 venue = COALESCE($4, venue),
                 status = COALESCE($5, status),
                 plus_one = COALESCE($6, plus_one),
                 updated_at = now()
             WHERE id = $1
             RETURNING {INVITATION_COLUMNS}"
        ))
        .bind(id)
        .bind(changes.name)
        .bind(changes.event_date)
        .bind(changes.venue)
        .bind(changes.status)
        .bind(changes.plus_one)
        .fetch_optional(&self.db)
        .await?;

        Ok(invitation)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM invitations WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn status_counts(&self) -> Result<StatusCounts, AppError> {
        let (total, confirmed, pending, declined): (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*),
                    COUNT(*) FILTER (WHERE status = 'confirmed'),
                    COUNT(*) FILTER (WHERE status = 'pending'),
                    COUNT(*) FILTER (WHERE status = 'declined')
             FROM invitations",
        )
        .fetch_one(&self.db)
        .await?;

        Ok(StatusCounts {
            total,
            confirmed,
            pending,
            declined,
        })
    }

    async fn recently_updated(&self, limit: i64) -> Result<Vec<Invitation>, AppError> {
        let invitations = sqlx::query_as::<_, Invitation>(&format!(
            "SELECT {INVITATION_COLUMNS} FROM invitations ORDER BY updated_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(invitations)
    }
}
