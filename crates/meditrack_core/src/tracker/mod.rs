//! Screen-scoped tracker models.
//!
//! # Responsibility
//! - Own mutable per-screen state and its operation contracts.
//! - Recompute derived metrics (adherence, goal progress, unread count)
//!   on read.
//!
//! # Invariants
//! - Each tracker is exclusively owned by one screen for that screen's
//!   lifetime; nothing here is shared across models.
//! - Every rejected operation returns a typed error and leaves state
//!   unchanged.

pub mod medication_tracker;
pub mod notification_feed;
pub mod water_tracker;
