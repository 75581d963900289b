//! Medication domain model.
//!
//! # Responsibility
//! - Define the medication record rendered on the home dashboard.
//! - Provide a validated wall-clock dose time value.
//!
//! # Invariants
//! - `id` is stable and unique within the active set for the session
//!   lifetime.
//! - `TimeOfDay` always holds a valid 24-hour wall-clock value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a tracked medication.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MedicationId = Uuid;

static TIME_OF_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").expect("valid time regex"));

/// Error for `TimeOfDay` parsing and construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeOfDayError {
    /// Input does not match the 24-hour `HH:MM` shape.
    InvalidFormat(String),
    /// Components are outside the 24-hour wall-clock range.
    OutOfRange { hour: u8, minute: u8 },
}

impl Display for TimeOfDayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(value) => {
                write!(f, "invalid time of day `{value}`; expected `HH:MM` (24-hour)")
            }
            Self::OutOfRange { hour, minute } => {
                write!(f, "time of day {hour:02}:{minute:02} is outside the 24-hour range")
            }
        }
    }
}

impl Error for TimeOfDayError {}

/// Wall-clock dose time with minute resolution.
///
/// Serialized as an `"HH:MM"` string, the shape the add-medication form
/// submits and the medication card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day from numeric components.
    ///
    /// # Errors
    /// - Returns `OutOfRange` unless `hour < 24` and `minute < 60`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeOfDayError> {
        if hour > 23 || minute > 59 {
            return Err(TimeOfDayError::OutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Parses a 24-hour `HH:MM` string; a single-digit hour is accepted.
    pub fn parse(value: &str) -> Result<Self, TimeOfDayError> {
        let captures = TIME_OF_DAY_RE
            .captures(value.trim())
            .ok_or_else(|| TimeOfDayError::InvalidFormat(value.to_string()))?;
        let hour = captures[1]
            .parse::<u8>()
            .map_err(|_| TimeOfDayError::InvalidFormat(value.to_string()))?;
        let minute = captures[2]
            .parse::<u8>()
            .map_err(|_| TimeOfDayError::InvalidFormat(value.to_string()))?;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeOfDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// One medication tracked for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    /// Stable ID used for toggle targeting and list keying.
    pub id: MedicationId,
    /// Display name, stored trimmed.
    pub name: String,
    /// Free-form dosage text (for example `200mg`), stored trimmed.
    pub dosage: String,
    /// Scheduled dose time shown on the medication card.
    pub time: TimeOfDay,
    /// Whether today's dose has been taken.
    pub taken: bool,
}

impl Medication {
    /// Creates a new untaken medication with a generated stable ID.
    pub fn new(name: impl Into<String>, dosage: impl Into<String>, time: TimeOfDay) -> Self {
        Self::with_id(Uuid::new_v4(), name, dosage, time)
    }

    /// Creates a medication with a caller-provided stable ID.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this medication lifetime.
    pub fn with_id(
        id: MedicationId,
        name: impl Into<String>,
        dosage: impl Into<String>,
        time: TimeOfDay,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            dosage: dosage.into(),
            time,
            taken: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeOfDay, TimeOfDayError};

    #[test]
    fn parse_accepts_padded_and_unpadded_hours() {
        assert_eq!(TimeOfDay::parse("08:30").unwrap().hour(), 8);
        assert_eq!(TimeOfDay::parse("8:30").unwrap().minute(), 30);
        assert_eq!(TimeOfDay::parse("23:59").unwrap().to_string(), "23:59");
        assert_eq!(TimeOfDay::parse(" 00:00 ").unwrap().to_string(), "00:00");
    }

    #[test]
    fn parse_rejects_out_of_range_and_malformed_input() {
        for raw in ["24:00", "12:60", "noon", "12", "12:3", "-1:30", ""] {
            let err = TimeOfDay::parse(raw).unwrap_err();
            assert!(matches!(err, TimeOfDayError::InvalidFormat(_)), "input `{raw}`");
        }
    }

    #[test]
    fn new_rejects_out_of_range_components() {
        assert_eq!(
            TimeOfDay::new(24, 0).unwrap_err(),
            TimeOfDayError::OutOfRange { hour: 24, minute: 0 }
        );
        assert!(TimeOfDay::new(23, 59).is_ok());
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(7, 5).unwrap().to_string(), "07:05");
    }
}
