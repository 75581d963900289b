//! Water intake screen model.
//!
//! # Responsibility
//! - Own the running intake total and the bounded recent-entry log.
//! - Derive goal progress and the encouragement tier for the tracker
//!   screen.
//!
//! # Invariants
//! - The log holds at most `WATER_LOG_CAP` entries, newest first.
//! - `total_ml` never goes below zero; undo clamps instead of
//!   underflowing.
//! - `total_ml` is maintained independently of the capped log and can
//!   exceed the sum of retained entries once entries age past the cap.
//!   Undo only ever removes the head entry, which the cap always retains,
//!   so an undo can never target an aged-out entry.

use crate::model::water::WaterEntry;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Daily intake goal applied when no explicit goal is configured (2.5 L).
pub const DEFAULT_WATER_GOAL_ML: u32 = 2500;

/// Number of recent entries retained for display and undo.
pub const WATER_LOG_CAP: usize = 10;

/// Quick-add button amounts offered by the tracker screen.
pub const QUICK_ADD_AMOUNTS_ML: [u32; 5] = [100, 200, 300, 400, 500];

/// Error for water tracker intents. Every `Err` leaves state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaterTrackerError {
    /// Added amount must be a positive number of milliliters.
    NonPositiveAmount(i64),
    /// Undo requested with no retained entries.
    EmptyLog,
}

impl Display for WaterTrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "water amount must be positive milliliters, got {amount}")
            }
            Self::EmptyLog => write!(f, "no water entries to undo"),
        }
    }
}

impl Error for WaterTrackerError {}

/// Encouragement tier derived from goal progress.
///
/// Thresholds are inclusive lower bounds on the progress percentage, so
/// exactly one tier applies to any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationTier {
    /// Below half of the goal.
    Starting,
    /// At least half of the goal.
    Halfway,
    /// At least three quarters of the goal.
    NearGoal,
    /// Goal reached or exceeded.
    Complete,
}

impl HydrationTier {
    /// Maps a progress percentage to its tier.
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            100.. => Self::Complete,
            75..=99 => Self::NearGoal,
            50..=74 => Self::Halfway,
            _ => Self::Starting,
        }
    }

    /// Stable label rendered by the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Halfway => "halfway",
            Self::NearGoal => "near-goal",
            Self::Complete => "complete",
        }
    }

    /// Shortfall rank: `0` (goal met) through `3` (just started).
    pub fn severity(&self) -> u8 {
        match self {
            Self::Complete => 0,
            Self::NearGoal => 1,
            Self::Halfway => 2,
            Self::Starting => 3,
        }
    }
}

/// Screen-scoped model for daily water intake.
///
/// Owned by the water tracker screen's view controller for its lifetime.
/// Derived values are recomputed on read; nothing is cached.
#[derive(Debug)]
pub struct WaterTracker {
    goal_ml: u32,
    total_ml: u32,
    log: Vec<WaterEntry>,
}

impl Default for WaterTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WATER_GOAL_ML)
    }
}

impl WaterTracker {
    /// Creates an empty tracker with the given daily goal.
    ///
    /// A zero goal falls back to `DEFAULT_WATER_GOAL_ML` so progress
    /// arithmetic stays well-defined.
    pub fn new(goal_ml: u32) -> Self {
        let goal_ml = if goal_ml == 0 {
            DEFAULT_WATER_GOAL_ML
        } else {
            goal_ml
        };
        Self {
            goal_ml,
            total_ml: 0,
            log: Vec::new(),
        }
    }

    pub fn goal_ml(&self) -> u32 {
        self.goal_ml
    }

    /// Running intake total in milliliters.
    pub fn total_ml(&self) -> u32 {
        self.total_ml
    }

    /// Retained entries, newest first.
    pub fn entries(&self) -> &[WaterEntry] {
        &self.log
    }

    /// Records one water addition and returns the created entry.
    ///
    /// # Contract
    /// - `amount_ml <= 0` is rejected; total and log are unchanged.
    /// - The entry is prepended; entries beyond `WATER_LOG_CAP` are
    ///   discarded oldest-first and are not recoverable.
    /// - `logged_at_ms` is caller-supplied epoch milliseconds.
    pub fn add_water(
        &mut self,
        amount_ml: i64,
        logged_at_ms: i64,
    ) -> Result<WaterEntry, WaterTrackerError> {
        let amount = match u32::try_from(amount_ml) {
            Ok(value) if value > 0 => value,
            _ => return Err(WaterTrackerError::NonPositiveAmount(amount_ml)),
        };

        self.total_ml = self.total_ml.saturating_add(amount);
        let entry = WaterEntry {
            amount_ml: amount,
            logged_at_ms,
        };
        self.log.insert(0, entry);
        self.log.truncate(WATER_LOG_CAP);
        Ok(entry)
    }

    /// Removes the most recent entry, refunds its amount, and returns it.
    ///
    /// # Contract
    /// - Rejected when the log is empty; total and log are unchanged.
    /// - Removes exactly one entry per call, always the newest.
    /// - The total clamps at zero rather than underflowing.
    pub fn undo_last(&mut self) -> Result<WaterEntry, WaterTrackerError> {
        if self.log.is_empty() {
            return Err(WaterTrackerError::EmptyLog);
        }
        let entry = self.log.remove(0);
        self.total_ml = self.total_ml.saturating_sub(entry.amount_ml);
        Ok(entry)
    }

    /// Progress toward the daily goal as a whole percentage.
    ///
    /// Integer floor of `100 * total / goal`, capped at 100.
    pub fn progress_percent(&self) -> u8 {
        let percent = u64::from(self.total_ml) * 100 / u64::from(self.goal_ml);
        percent.min(100) as u8
    }

    /// Encouragement tier for the current progress.
    pub fn status_tier(&self) -> HydrationTier {
        HydrationTier::from_percent(self.progress_percent())
    }
}
