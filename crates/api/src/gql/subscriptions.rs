use async_graphql::{Context, Result, Subscription};
use futures_util::Stream;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use uuid::Uuid;

use crate::gql::types::SlotBlockedEvent;
use crate::state::AppState;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Slots blocked from now on, optionally only those touching one court.
    async fn slot_blocked(
        &self,
        ctx: &Context<'_>,
        court_id: Option<Uuid>,
    ) -> Result<impl Stream<Item = SlotBlockedEvent>> {
        let state = ctx.data::<AppState>()?;
        let receiver = state.slot_events().subscribe();

        // Lagged receivers skip what they missed
        Ok(BroadcastStream::new(receiver).filter_map(move |event| match event {
            Ok(event) if court_id.map_or(true, |id| event.court_ids.contains(&id)) => Some(event),
            _ => None,
        }))
    }
}
