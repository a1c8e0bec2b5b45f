pub mod availability;
pub mod blocked_slots;
pub mod courts;

pub use availability::AvailabilityRepo;
pub use blocked_slots::{BlockedSlotRepo, NewBlockedSlot};
pub use courts::CourtRepo;
