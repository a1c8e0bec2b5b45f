use std::sync::Arc;

use infra::blocking::{BlockedSlotStore, CourtDirectory, PgStore, SlotAvailability, SlotBlockingService};
use sqlx::PgPool;
use tokio::sync::broadcast;

use crate::auth::{AuthConfig, JwtService};
use crate::gql::types::SlotBlockedEvent;

const SLOT_EVENT_CAPACITY: usize = 1000;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    blocking: SlotBlockingService,
    jwt_service: JwtService,
    slot_events: broadcast::Sender<SlotBlockedEvent>,
}

impl AppState {
    pub fn new(db: PgPool) -> anyhow::Result<Self> {
        let auth_config = AuthConfig::from_env()?;
        let store = Arc::new(PgStore::new(db.clone()));
        Ok(Self::with_store(db, &auth_config, store))
    }

    /// Build the state over any store, e.g. `MemoryStore` in tests.
    pub fn with_store<S>(db: PgPool, auth_config: &AuthConfig, store: Arc<S>) -> Self
    where
        S: CourtDirectory + BlockedSlotStore + SlotAvailability + 'static,
    {
        let (slot_events, _) = broadcast::channel(SLOT_EVENT_CAPACITY);

        Self {
            db,
            blocking: SlotBlockingService::new(store),
            jwt_service: JwtService::new(auth_config),
            slot_events,
        }
    }

    pub fn blocking(&self) -> &SlotBlockingService {
        &self.blocking
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn slot_events(&self) -> &broadcast::Sender<SlotBlockedEvent> {
        &self.slot_events
    }
}
