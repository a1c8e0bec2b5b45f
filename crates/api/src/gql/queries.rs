use async_graphql::{Context, Object, Result};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::blocking_error;
use crate::gql::types::{AvailableSlot, BlockedSlot, Court};
use crate::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Current server time (UTC).
    async fn server_time(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Courts of a venue, active and inactive.
    async fn courts(&self, ctx: &Context<'_>, venue_id: Uuid) -> Result<Vec<Court>> {
        let state = ctx.data::<AppState>()?;
        let rows = state
            .blocking()
            .courts_for_venue(venue_id)
            .await
            .map_err(blocking_error)?;
        Ok(rows.into_iter().map(Court::from).collect())
    }

    async fn court(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Court>> {
        let state = ctx.data::<AppState>()?;
        let row = state.blocking().find_court(id).await.map_err(blocking_error)?;
        Ok(row.map(Court::from))
    }

    /// Blocked slots of a court on one day, by start time.
    async fn blocked_slots(
        &self,
        ctx: &Context<'_>,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<BlockedSlot>> {
        let state = ctx.data::<AppState>()?;
        let rows = state
            .blocking()
            .blocked_slots_for(court_id, date)
            .await
            .map_err(blocking_error)?;
        Ok(rows.into_iter().map(BlockedSlot::from).collect())
    }

    /// Candidate slots as computed by the database's availability function.
    async fn available_slots(
        &self,
        ctx: &Context<'_>,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<AvailableSlot>> {
        let state = ctx.data::<AppState>()?;
        let rows = state
            .blocking()
            .available_slots(court_id, date)
            .await
            .map_err(blocking_error)?;
        Ok(rows.into_iter().map(AvailableSlot::from).collect())
    }
}
