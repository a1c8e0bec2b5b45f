use async_graphql::{Context, Object, Result};
use infra::blocking::BlockSlotRequest;

use crate::auth::permissions::{current_user, require_admin};
use crate::error::blocking_error;
use crate::gql::types::{BlockSlotInput, BlockSlotPayload, BlockedSlot, SlotBlockedEvent};
use crate::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Block a slot on a court and on every active court sharing its group.
    ///
    /// Anonymous callers are reported as missing information; authenticated
    /// callers must be admins.
    async fn block_slot(&self, ctx: &Context<'_>, input: BlockSlotInput) -> Result<BlockSlotPayload> {
        let state = ctx.data::<AppState>()?;

        let admin_id = match current_user(ctx)? {
            Some(_) => Some(require_admin(ctx)?),
            None => None,
        };

        let outcome = state
            .blocking()
            .block_slot(BlockSlotRequest {
                court_id: input.court_id,
                date: input.date,
                slot: input.slot.map(Into::into),
                reason: input.reason,
                admin_id,
            })
            .await
            .map_err(blocking_error)?;

        if let Some(first) = outcome.blocked.first() {
            // No subscribers is fine
            let _ = state.slot_events().send(SlotBlockedEvent {
                court_ids: outcome.court_ids.clone(),
                date: first.date,
                start_time: first.start_time.clone(),
                end_time: first.end_time.clone(),
                reason: first.reason.clone(),
                created_by: first.created_by,
            });
        }

        Ok(BlockSlotPayload {
            courts_blocked: outcome.courts_blocked() as i32,
            message: outcome.message,
            court_ids: outcome.court_ids,
            blocked_slots: outcome.blocked.into_iter().map(BlockedSlot::from).collect(),
        })
    }
}
