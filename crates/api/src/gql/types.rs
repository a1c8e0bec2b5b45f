use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use chrono::{DateTime, NaiveDate, Utc};
use infra::blocking::SelectedSlot;
use infra::models::{AvailableSlotRow, BlockedSlotRow, CourtRow};
use uuid::Uuid;

use crate::error::blocking_error;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Player,
}

impl From<Option<String>> for Role {
    fn from(role: Option<String>) -> Self {
        match role.as_deref().map(str::trim) {
            Some(r) if r.eq_ignore_ascii_case("admin") => Role::Admin,
            _ => Role::Player,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Court {
    pub id: Uuid,
    pub name: String,
    pub venue_id: Uuid,
    pub shared_group_id: Option<String>,
    pub is_active: bool,
}

impl From<CourtRow> for Court {
    fn from(row: CourtRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            venue_id: row.venue_id,
            shared_group_id: row.shared_group_id,
            is_active: row.is_active,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct BlockedSlot {
    pub id: Uuid,
    pub court_id: Uuid,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<BlockedSlotRow> for BlockedSlot {
    fn from(row: BlockedSlotRow) -> Self {
        Self {
            id: row.id,
            court_id: row.court_id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            reason: row.reason,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}

#[ComplexObject]
impl BlockedSlot {
    async fn court(&self, ctx: &Context<'_>) -> Result<Option<Court>> {
        let state = ctx.data::<AppState>()?;
        let row = state
            .blocking()
            .find_court(self.court_id)
            .await
            .map_err(blocking_error)?;
        Ok(row.map(Court::from))
    }
}

#[derive(SimpleObject, Clone)]
pub struct AvailableSlot {
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

impl From<AvailableSlotRow> for AvailableSlot {
    fn from(row: AvailableSlotRow) -> Self {
        Self {
            start_time: row.start_time,
            end_time: row.end_time,
            is_available: row.is_available,
        }
    }
}

#[derive(InputObject)]
pub struct SelectedSlotInput {
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

impl From<SelectedSlotInput> for SelectedSlot {
    fn from(input: SelectedSlotInput) -> Self {
        Self {
            start_time: input.start_time,
            end_time: input.end_time,
            is_available: input.is_available,
        }
    }
}

#[derive(InputObject)]
pub struct BlockSlotInput {
    pub court_id: Uuid,
    pub date: NaiveDate,
    pub slot: Option<SelectedSlotInput>,
    pub reason: Option<String>,
}

#[derive(SimpleObject, Clone)]
pub struct BlockSlotPayload {
    pub message: String,
    pub courts_blocked: i32,
    pub court_ids: Vec<Uuid>,
    pub blocked_slots: Vec<BlockedSlot>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct SlotBlockedEvent {
    pub court_ids: Vec<Uuid>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
    pub created_by: Uuid,
}
