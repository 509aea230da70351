//! Binary-heap priority queue for the triage waiting room.
//!
//! This crate provides the `PatientQueue`, which always hands back the most
//! urgent patient, breaking ties by arrival:
//! - Array-backed binary min-heap over `Patient` records
//! - Arrival sequence numbers assigned at insert, never reused
//! - `EmptyQueue` errors instead of panics on an empty waiting room
//!
//! # Example
//!
//! ```
//! use triage_models::PriorityCode;
//! use triage_queue::PatientQueue;
//!
//! let mut queue = PatientQueue::new();
//! queue.insert("Alice", PriorityCode::Urgent.code());
//! queue.insert("Bob", PriorityCode::Immediate.code());
//!
//! assert_eq!(queue.peek().unwrap().name(), "Bob");
//! assert_eq!(queue.remove().unwrap().name(), "Bob");
//! assert_eq!(queue.size(), 1);
//! ```

pub mod error;
pub mod queue;

pub use error::{QueueError, Result};
pub use queue::PatientQueue;
