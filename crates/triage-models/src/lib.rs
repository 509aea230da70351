//! Core data models for the triage waiting room.
//!
//! This crate provides the value types shared by the queue engine and the
//! triage shell: the [`Patient`] record and the [`PriorityCode`] scale.

pub mod patient;
pub mod priority;

pub use patient::Patient;
pub use priority::{ParsePriorityError, PriorityCode};
