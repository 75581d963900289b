//! Medication tracker screen model.
//!
//! # Responsibility
//! - Own today's medication list for the home dashboard.
//! - Provide add/toggle intents and the derived adherence projection.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Medication IDs are unique within the list for the session lifetime.
//! - Rejected intents leave the list untouched.

use crate::model::medication::{Medication, MedicationId, TimeOfDay};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for medication tracker intents.
///
/// Every `Err` leaves tracker state unchanged. The UI treats these as
/// silent rejections; the typed value exists so the contract is explicit
/// and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedicationTrackerError {
    /// Name is blank after trim.
    EmptyName,
    /// Dosage is blank after trim.
    EmptyDosage,
    /// No medication matches the given ID.
    UnknownId(MedicationId),
}

impl Display for MedicationTrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "medication name cannot be blank"),
            Self::EmptyDosage => write!(f, "medication dosage cannot be blank"),
            Self::UnknownId(id) => write!(f, "medication not found: {id}"),
        }
    }
}

impl Error for MedicationTrackerError {}

/// Derived adherence numbers for the dashboard header ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdherenceSummary {
    /// Medications marked taken today.
    pub taken: u32,
    /// Medications tracked today.
    pub total: u32,
    /// `round(100 * taken / total)`; `0` when nothing is tracked.
    pub percent: u8,
}

/// Screen-scoped model for today's medications.
///
/// Owned by the home screen's view controller for its lifetime. Derived
/// values are recomputed on read; nothing is cached.
#[derive(Debug, Default)]
pub struct MedicationTracker {
    medications: Vec<Medication>,
}

impl MedicationTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one medication for today and returns a snapshot of it.
    ///
    /// # Contract
    /// - `name` and `dosage` are trimmed before storage; blank (empty or
    ///   whitespace-only) values are rejected.
    /// - New entries start untaken and append after existing entries.
    /// - Duplicate names are allowed.
    pub fn add_medication(
        &mut self,
        name: &str,
        dosage: &str,
        time: TimeOfDay,
    ) -> Result<Medication, MedicationTrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MedicationTrackerError::EmptyName);
        }
        let dosage = dosage.trim();
        if dosage.is_empty() {
            return Err(MedicationTrackerError::EmptyDosage);
        }

        let medication = Medication::new(name, dosage, time);
        self.medications.push(medication.clone());
        Ok(medication)
    }

    /// Flips the taken flag on exactly one medication and returns its
    /// updated snapshot.
    ///
    /// # Contract
    /// - Unknown IDs are rejected; every entry stays unchanged.
    /// - Applying twice restores the original flag.
    pub fn toggle_taken(&mut self, id: MedicationId) -> Result<Medication, MedicationTrackerError> {
        let medication = self
            .medications
            .iter_mut()
            .find(|medication| medication.id == id)
            .ok_or(MedicationTrackerError::UnknownId(id))?;
        medication.taken = !medication.taken;
        Ok(medication.clone())
    }

    /// Read view over today's medications in display order.
    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    /// Percentage of today's medications marked taken.
    pub fn adherence_percent(&self) -> u8 {
        self.adherence().percent
    }

    /// Dashboard adherence projection ("3 of 4 taken today").
    ///
    /// The percentage is `round(100 * taken / total)` with halves rounded
    /// up, and `0` when the list is empty.
    pub fn adherence(&self) -> AdherenceSummary {
        let total = self.medications.len() as u32;
        let taken = self
            .medications
            .iter()
            .filter(|medication| medication.taken)
            .count() as u32;
        let percent = if total == 0 {
            0
        } else {
            ((200 * u64::from(taken) + u64::from(total)) / (2 * u64::from(total))) as u8
        };
        AdherenceSummary {
            taken,
            total,
            percent,
        }
    }
}
