use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rsvp_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Pending,
    Confirmed,
    Declined,
    Rescinded,
}

impl RsvpStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
            Self::Rescinded => "rescinded",
        }
    }

    /// Guarded transition policy: rescinded is terminal, and a status never
    /// returns to pending. Same-status writes are always allowed.
    pub fn can_transition_to(self, next: RsvpStatus) -> bool {
        if self == next {
            return true;
        }
        match (self, next) {
            (Self::Rescinded, _) => false,
            (_, Self::Pending) => false,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: Uuid,
    pub name: String,
    pub event_date: DateTime<Utc>,
    pub venue: String,
    pub status: RsvpStatus,
    pub plus_one: i32,
    pub qr_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    pub name: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub status: Option<RsvpStatus>,
    pub plus_one: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvitationRequest {
    pub name: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub status: Option<RsvpStatus>,
    pub plus_one: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RsvpRequest {
    pub status: Option<RsvpStatus>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMetrics {
    pub total_invitations: i64,
    pub confirmed_rsvps: i64,
    pub pending_rsvps: i64,
    pub declined_rsvps: i64,
    pub attendance_rate: i64,
}

/// Row shape for the admin dashboard table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationTableEntry {
    pub id: Uuid,
    pub name: String,
    pub event_date: DateTime<Utc>,
    pub venue: String,
    pub status: RsvpStatus,
    pub has_qr_code: bool,
    pub qr_code: String,
    pub plus_one: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Invitation> for InvitationTableEntry {
    fn from(inv: Invitation) -> Self {
        Self {
            id: inv.id,
            name: inv.name,
            event_date: inv.event_date,
            venue: inv.venue,
            status: inv.status,
            has_qr_code: !inv.qr_code.is_empty(),
            qr_code: inv.qr_code,
            plus_one: inv.plus_one,
            created_at: inv.created_at,
            updated_at: inv.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusUpdate {
    pub id: Uuid,
    pub name: String,
    pub status: RsvpStatus,
    pub timestamp: DateTime<Utc>,
}
