//! Triage priority codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Triage urgency scale.
///
/// Lower codes are more urgent, so the derived `Ord` sorts the most urgent
/// code first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityCode {
    /// Life-threatening, seen at once.
    Immediate = 1,
    /// Could become life-threatening.
    Emergency = 2,
    /// Serious but stable.
    Urgent = 3,
    /// Minor injuries.
    Minimal = 4,
}

/// Error returned when text is not one of the priority keywords.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid priority code: {0}")]
pub struct ParsePriorityError(pub String);

impl PriorityCode {
    /// All codes, most urgent first.
    pub const ALL: [PriorityCode; 4] = [
        PriorityCode::Immediate,
        PriorityCode::Emergency,
        PriorityCode::Urgent,
        PriorityCode::Minimal,
    ];

    /// Returns the numeric class (1 = most urgent).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Maps a numeric class back to its code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Returns the canonical lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityCode::Immediate => "immediate",
            PriorityCode::Emergency => "emergency",
            PriorityCode::Urgent => "urgent",
            PriorityCode::Minimal => "minimal",
        }
    }

    /// Returns true if `word` is exactly one of the priority keywords.
    pub fn is_keyword(word: &str) -> bool {
        word.parse::<PriorityCode>().is_ok()
    }
}

impl fmt::Display for PriorityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityCode {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immediate" => Ok(PriorityCode::Immediate),
            "emergency" => Ok(PriorityCode::Emergency),
            "urgent" => Ok(PriorityCode::Urgent),
            "minimal" => Ok(PriorityCode::Minimal),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

impl From<PriorityCode> for u8 {
    fn from(code: PriorityCode) -> Self {
        code.code()
    }
}
