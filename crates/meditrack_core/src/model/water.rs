//! Water intake domain model.
//!
//! # Responsibility
//! - Define the log entry shape retained by the water tracker.
//!
//! # Invariants
//! - `amount_ml` is always positive; the tracker rejects non-positive
//!   additions before an entry is constructed.

use serde::{Deserialize, Serialize};

/// One recorded water addition.
///
/// Timestamps are Unix epoch milliseconds supplied by the caller, so the
/// model stays deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterEntry {
    /// Amount added in milliliters, always positive.
    pub amount_ml: u32,
    /// Unix epoch milliseconds when the addition was logged.
    pub logged_at_ms: i64,
}
