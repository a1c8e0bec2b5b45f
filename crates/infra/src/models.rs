use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CourtRow {
    pub id: Uuid,
    pub name: String,
    pub venue_id: Uuid,
    pub shared_group_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourtRow {
    /// Group id of the court exactly as stored, with blank ids treated as
    /// "no group". Members are matched on the stored value, so it is not trimmed.
    pub fn group_id(&self) -> Option<&str> {
        self.shared_group_id
            .as_deref()
            .filter(|g| !g.trim().is_empty())
    }
}

/// Times are carried as `HH:MM:SS` text.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct BlockedSlotRow {
    pub id: Uuid,
    pub court_id: Uuid,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// One candidate window returned by `get_available_slots`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct AvailableSlotRow {
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}
