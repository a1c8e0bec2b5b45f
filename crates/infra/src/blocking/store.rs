use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::BlockingError;
use crate::{
    db::Db,
    models::{AvailableSlotRow, BlockedSlotRow, CourtRow},
    repos::{AvailabilityRepo, BlockedSlotRepo, CourtRepo, NewBlockedSlot},
};

/// Read access to courts and their group membership.
#[async_trait]
pub trait CourtDirectory: Send + Sync {
    async fn find_court(&self, court_id: Uuid) -> Result<Option<CourtRow>, BlockingError>;

    /// Active courts sharing `group_id`. An empty result is not an error.
    async fn active_courts_in_group(&self, group_id: &str) -> Result<Vec<Uuid>, BlockingError>;

    async fn courts_for_venue(&self, venue_id: Uuid) -> Result<Vec<CourtRow>, BlockingError>;
}

#[async_trait]
pub trait BlockedSlotStore: Send + Sync {
    /// Persist the whole batch or nothing.
    async fn insert_blocked_slots(
        &self,
        slots: &[NewBlockedSlot],
    ) -> Result<Vec<BlockedSlotRow>, BlockingError>;

    async fn blocked_slots_for(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<BlockedSlotRow>, BlockingError>;
}

/// Candidate windows computed by the external availability procedure.
#[async_trait]
pub trait SlotAvailability: Send + Sync {
    async fn available_slots(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<AvailableSlotRow>, BlockingError>;
}

#[derive(Debug, Clone)]
pub struct PgStore {
    courts: CourtRepo,
    blocked_slots: BlockedSlotRepo,
    availability: AvailabilityRepo,
}

impl PgStore {
    pub fn new(pool: Db) -> Self {
        Self {
            courts: CourtRepo::new(pool.clone()),
            blocked_slots: BlockedSlotRepo::new(pool.clone()),
            availability: AvailabilityRepo::new(pool),
        }
    }
}

#[async_trait]
impl CourtDirectory for PgStore {
    async fn find_court(&self, court_id: Uuid) -> Result<Option<CourtRow>, BlockingError> {
        Ok(self.courts.get(court_id).await?)
    }

    async fn active_courts_in_group(&self, group_id: &str) -> Result<Vec<Uuid>, BlockingError> {
        Ok(self.courts.list_active_ids_in_group(group_id).await?)
    }

    async fn courts_for_venue(&self, venue_id: Uuid) -> Result<Vec<CourtRow>, BlockingError> {
        Ok(self.courts.list_by_venue(venue_id).await?)
    }
}

#[async_trait]
impl BlockedSlotStore for PgStore {
    async fn insert_blocked_slots(
        &self,
        slots: &[NewBlockedSlot],
    ) -> Result<Vec<BlockedSlotRow>, BlockingError> {
        Ok(self.blocked_slots.insert_batch(slots).await?)
    }

    async fn blocked_slots_for(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<BlockedSlotRow>, BlockingError> {
        Ok(self.blocked_slots.list_for_court_on(court_id, date).await?)
    }
}

#[async_trait]
impl SlotAvailability for PgStore {
    async fn available_slots(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<AvailableSlotRow>, BlockingError> {
        Ok(self.availability.get_available_slots(court_id, date).await?)
    }
}
