//! Patient records.
//!
//! A [`Patient`] is one entry in the waiting room. Records are built by the
//! queue at insert time and never change afterwards.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::priority::PriorityCode;

/// A patient waiting to be seen.
///
/// # Ordering Rules
///
/// 1. Lower priority class comes first (immediate before minimal)
/// 2. For the same class, earlier arrival comes first
///
/// `Ordering::Less` therefore means "more urgent". Equality compares the
/// same key, so two records with the same class and arrival are equal even if
/// their names differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    name: String,
    priority_class: u8,
    arrival_sequence: u64,
}

impl Patient {
    /// Creates a patient record.
    ///
    /// No validation is done here; the queue assigns `arrival_sequence` and
    /// callers are expected to pass a class from [`PriorityCode`].
    pub fn new(name: impl Into<String>, priority_class: u8, arrival_sequence: u64) -> Self {
        Self {
            name: name.into(),
            priority_class,
            arrival_sequence,
        }
    }

    /// Returns the patient's name as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the numeric priority class.
    pub fn priority_class(&self) -> u8 {
        self.priority_class
    }

    /// Returns the typed priority, or `None` for an unrecognized class.
    pub fn priority(&self) -> Option<PriorityCode> {
        PriorityCode::from_code(self.priority_class)
    }

    /// Returns the zero-based arrival sequence.
    pub fn arrival_sequence(&self) -> u64 {
        self.arrival_sequence
    }

    /// Returns the priority label, or an empty string for an unknown class.
    pub fn priority_name(&self) -> &'static str {
        self.priority().map(PriorityCode::as_str).unwrap_or("")
    }

    /// Returns true if this patient should be called before `other`.
    pub fn is_more_urgent_than(&self, other: &Patient) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Returns true if `other` should be called before this patient.
    pub fn is_less_urgent_than(&self, other: &Patient) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Formats one row of the waiting-room listing, newline included.
    ///
    /// The arrival number is shown one-based.
    pub fn render(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6}          {:<15}{}",
            self.arrival_sequence + 1,
            self.priority_name(),
            self.name
        )
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.priority_class == other.priority_class
            && self.arrival_sequence == other.arrival_sequence
    }
}

impl Eq for Patient {}

impl PartialOrd for Patient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Patient {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority_class
            .cmp(&other.priority_class)
            .then_with(|| self.arrival_sequence.cmp(&other.arrival_sequence))
    }
}
