//! Blocking a time slot on a court, propagated across its shared court group.
//!
//! The flow is a serial chain: look the court up, expand its group to the
//! active members, then write one blocked slot per member as a single batch.
//! Storage sits behind the traits in [`store`] so the same orchestrator runs
//! against Postgres ([`PgStore`]) or the in-memory [`MemoryStore`].

pub mod error;
pub mod memory;
pub mod normalize;
pub mod service;
pub mod store;

pub use error::BlockingError;
pub use memory::MemoryStore;
pub use normalize::{normalize_reason, normalize_time, DEFAULT_REASON};
pub use service::{BlockOutcome, BlockSlotRequest, SelectedSlot, SlotBlockingService};
pub use store::{BlockedSlotStore, CourtDirectory, PgStore, SlotAvailability};
