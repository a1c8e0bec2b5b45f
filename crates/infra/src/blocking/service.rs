use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{
    normalize_reason, normalize_time, BlockedSlotStore, BlockingError, CourtDirectory,
    SlotAvailability,
};
use crate::{
    models::{AvailableSlotRow, BlockedSlotRow, CourtRow},
    repos::NewBlockedSlot,
};

/// The slot the admin picked from the availability grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSlot {
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

#[derive(Debug, Clone)]
pub struct BlockSlotRequest {
    pub court_id: Uuid,
    pub date: NaiveDate,
    pub slot: Option<SelectedSlot>,
    pub reason: Option<String>,
    pub admin_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct BlockOutcome {
    pub court_ids: Vec<Uuid>,
    pub blocked: Vec<BlockedSlotRow>,
    pub message: String,
}

impl BlockOutcome {
    pub fn courts_blocked(&self) -> usize {
        self.court_ids.len()
    }
}

#[derive(Clone)]
pub struct SlotBlockingService {
    directory: Arc<dyn CourtDirectory>,
    slots: Arc<dyn BlockedSlotStore>,
    availability: Arc<dyn SlotAvailability>,
}

impl SlotBlockingService {
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: CourtDirectory + BlockedSlotStore + SlotAvailability + 'static,
    {
        Self {
            directory: store.clone(),
            slots: store.clone(),
            availability: store,
        }
    }

    /// Resolve a court, failing with `NotFound` when it does not exist.
    pub async fn lookup_court(&self, court_id: Uuid) -> Result<CourtRow, BlockingError> {
        self.directory
            .find_court(court_id)
            .await?
            .ok_or_else(|| BlockingError::NotFound(format!("court {court_id} not found")))
    }

    /// Courts that must be blocked together with `court`.
    ///
    /// Ungrouped courts, and groups with no active member left, yield just
    /// the court itself.
    pub async fn expand_group(&self, court: &CourtRow) -> Result<Vec<Uuid>, BlockingError> {
        let Some(group_id) = court.group_id() else {
            return Ok(vec![court.id]);
        };

        let members = self.directory.active_courts_in_group(group_id).await?;
        if members.is_empty() {
            debug!(court_id = %court.id, group_id, "group has no active courts, blocking court alone");
            return Ok(vec![court.id]);
        }

        debug!(court_id = %court.id, group_id, members = members.len(), "expanded court group");
        Ok(members)
    }

    /// Write one blocked slot per target court as a single batch.
    pub async fn write_blocks(
        &self,
        court_ids: &[Uuid],
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        reason: Option<&str>,
        created_by: Uuid,
    ) -> Result<Vec<BlockedSlotRow>, BlockingError> {
        if court_ids.is_empty() {
            return Err(BlockingError::InvalidInput("no courts to block".to_string()));
        }

        let start_time = normalize_time(start_time)?;
        let end_time = normalize_time(end_time)?;
        let reason = normalize_reason(reason);

        let batch: Vec<NewBlockedSlot> = court_ids
            .iter()
            .map(|&court_id| NewBlockedSlot {
                court_id,
                date,
                start_time: start_time.clone(),
                end_time: end_time.clone(),
                reason: reason.clone(),
                created_by,
            })
            .collect();

        self.slots.insert_blocked_slots(&batch).await
    }

    /// Block the selected slot on a court and on every active court sharing its group.
    pub async fn block_slot(&self, request: BlockSlotRequest) -> Result<BlockOutcome, BlockingError> {
        let (Some(admin_id), Some(slot)) = (request.admin_id, request.slot.as_ref()) else {
            warn!(court_id = %request.court_id, "block rejected: missing admin or slot");
            return Err(BlockingError::missing_information());
        };

        if !slot.is_available {
            warn!(
                court_id = %request.court_id,
                start_time = %slot.start_time,
                "blocking a slot that was not offered as available"
            );
        }

        let result = async {
            let court = self.lookup_court(request.court_id).await?;
            let court_ids = self.expand_group(&court).await?;
            let blocked = self
                .write_blocks(
                    &court_ids,
                    request.date,
                    &slot.start_time,
                    &slot.end_time,
                    request.reason.as_deref(),
                    admin_id,
                )
                .await?;
            Ok::<_, BlockingError>((court, court_ids, blocked))
        }
        .await;

        match result {
            Ok((court, court_ids, blocked)) => {
                info!(
                    court_id = %court.id,
                    group_id = court.group_id().unwrap_or("-"),
                    date = %request.date,
                    courts = court_ids.len(),
                    admin_id = %admin_id,
                    "blocked slot"
                );
                let message = format!("Slot blocked for {} court(s)", court_ids.len());
                Ok(BlockOutcome {
                    court_ids,
                    blocked,
                    message,
                })
            }
            Err(err) => {
                warn!(court_id = %request.court_id, error = %err, "failed to block slot");
                Err(err)
            }
        }
    }

    pub async fn courts_for_venue(&self, venue_id: Uuid) -> Result<Vec<CourtRow>, BlockingError> {
        self.directory.courts_for_venue(venue_id).await
    }

    pub async fn find_court(&self, court_id: Uuid) -> Result<Option<CourtRow>, BlockingError> {
        self.directory.find_court(court_id).await
    }

    pub async fn blocked_slots_for(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<BlockedSlotRow>, BlockingError> {
        self.slots.blocked_slots_for(court_id, date).await
    }

    pub async fn available_slots(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<AvailableSlotRow>, BlockingError> {
        self.availability.available_slots(court_id, date).await
    }
}
