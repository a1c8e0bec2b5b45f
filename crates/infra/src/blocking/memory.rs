use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BlockedSlotStore, BlockingError, CourtDirectory, SlotAvailability};
use crate::{
    models::{AvailableSlotRow, BlockedSlotRow, CourtRow},
    repos::NewBlockedSlot,
};

/// In-process store used by tests and local runs without Postgres.
#[derive(Default)]
pub struct MemoryStore {
    courts: RwLock<HashMap<Uuid, CourtRow>>,
    blocked_slots: RwLock<Vec<BlockedSlotRow>>,
    availability: RwLock<HashMap<(Uuid, NaiveDate), Vec<AvailableSlotRow>>>,
    fail_writes: AtomicBool,
    batches_written: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_court(
        &self,
        venue_id: Uuid,
        name: &str,
        shared_group_id: Option<&str>,
        is_active: bool,
    ) -> Uuid {
        let now = Utc::now();
        let court = CourtRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            venue_id,
            shared_group_id: shared_group_id.map(str::to_string),
            is_active,
            created_at: now,
            updated_at: now,
        };
        let id = court.id;
        self.courts.write().await.insert(id, court);
        id
    }

    pub async fn set_active(&self, court_id: Uuid, is_active: bool) {
        if let Some(court) = self.courts.write().await.get_mut(&court_id) {
            court.is_active = is_active;
            court.updated_at = Utc::now();
        }
    }

    pub async fn set_available_slots(
        &self,
        court_id: Uuid,
        date: NaiveDate,
        slots: Vec<AvailableSlotRow>,
    ) {
        self.availability.write().await.insert((court_id, date), slots);
    }

    /// Make every following batch write fail, as a rejected insert would.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn all_blocked_slots(&self) -> Vec<BlockedSlotRow> {
        self.blocked_slots.read().await.clone()
    }

    pub fn batches_written(&self) -> usize {
        self.batches_written.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CourtDirectory for MemoryStore {
    async fn find_court(&self, court_id: Uuid) -> Result<Option<CourtRow>, BlockingError> {
        Ok(self.courts.read().await.get(&court_id).cloned())
    }

    async fn active_courts_in_group(&self, group_id: &str) -> Result<Vec<Uuid>, BlockingError> {
        let courts = self.courts.read().await;
        let mut members: Vec<&CourtRow> = courts
            .values()
            .filter(|c| c.is_active && c.shared_group_id.as_deref() == Some(group_id))
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(members.into_iter().map(|c| c.id).collect())
    }

    async fn courts_for_venue(&self, venue_id: Uuid) -> Result<Vec<CourtRow>, BlockingError> {
        let courts = self.courts.read().await;
        let mut rows: Vec<CourtRow> = courts
            .values()
            .filter(|c| c.venue_id == venue_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(rows)
    }
}

#[async_trait]
impl BlockedSlotStore for MemoryStore {
    async fn insert_blocked_slots(
        &self,
        slots: &[NewBlockedSlot],
    ) -> Result<Vec<BlockedSlotRow>, BlockingError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(BlockingError::Persistence(
                "insert into blocked_slots rejected".to_string(),
            ));
        }

        let now = Utc::now();
        let rows: Vec<BlockedSlotRow> = slots
            .iter()
            .map(|slot| BlockedSlotRow {
                id: Uuid::new_v4(),
                court_id: slot.court_id,
                date: slot.date,
                start_time: slot.start_time.clone(),
                end_time: slot.end_time.clone(),
                reason: slot.reason.clone(),
                created_by: slot.created_by,
                created_at: now,
            })
            .collect();

        self.blocked_slots.write().await.extend(rows.iter().cloned());
        self.batches_written.fetch_add(1, Ordering::SeqCst);
        Ok(rows)
    }

    async fn blocked_slots_for(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<BlockedSlotRow>, BlockingError> {
        let mut rows: Vec<BlockedSlotRow> = self
            .blocked_slots
            .read()
            .await
            .iter()
            .filter(|s| s.court_id == court_id && s.date == date)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.created_at.cmp(&b.created_at)));
        Ok(rows)
    }
}

#[async_trait]
impl SlotAvailability for MemoryStore {
    async fn available_slots(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<AvailableSlotRow>, BlockingError> {
        Ok(self
            .availability
            .read()
            .await
            .get(&(court_id, date))
            .cloned()
            .unwrap_or_default())
    }
}
