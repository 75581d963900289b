//! Core domain logic for MediTrack.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod tracker;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::medication::{Medication, MedicationId, TimeOfDay, TimeOfDayError};
pub use model::notification::{Notification, NotificationId};
pub use model::water::WaterEntry;
pub use tracker::medication_tracker::{
    AdherenceSummary, MedicationTracker, MedicationTrackerError,
};
pub use tracker::notification_feed::NotificationFeed;
pub use tracker::water_tracker::{
    HydrationTier, WaterTracker, WaterTrackerError, DEFAULT_WATER_GOAL_ML, QUICK_ADD_AMOUNTS_ML,
    WATER_LOG_CAP,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
