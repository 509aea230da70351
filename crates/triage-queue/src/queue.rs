//! PatientQueue - array-backed binary min-heap of waiting patients.
//!
//! The heap is stored level by level in a `Vec`:
//! - parent of `i` is `(i - 1) / 2`
//! - children of `i` are `2i + 1` and `2i + 2`
//!
//! Every element is at least as urgent as both of its children between
//! public calls. Swaps move records in place, names are never cloned.

use std::slice;

use tracing::debug;
use triage_models::Patient;

use crate::error::{QueueError, Result};

/// Priority queue of patients waiting to be seen.
///
/// # Priority Ordering
///
/// - Lower priority class is called first (1 = immediate)
/// - Within the same class, earlier arrivals are called first (FIFO)
///
/// # Arrival Sequence
///
/// Each insert stamps the patient with the next arrival number. The counter
/// only moves forward, so numbers stay unique even after removals.
///
/// # Example
///
/// ```
/// use triage_queue::{PatientQueue, QueueError};
///
/// let mut queue = PatientQueue::new();
/// assert_eq!(queue.remove().unwrap_err(), QueueError::EmptyQueue);
///
/// queue.insert("Dan", 4);
/// assert_eq!(queue.peek().unwrap().arrival_sequence(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatientQueue {
    /// Heap-ordered patients.
    heap: Vec<Patient>,
    /// Arrival sequence for the next insert.
    next_arrival: u64,
}

impl PatientQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` patients.
    ///
    /// Capacity is only an allocation hint; the queue grows past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            next_arrival: 0,
        }
    }

    /// Adds a patient and restores heap order.
    ///
    /// # Returns
    ///
    /// The arrival sequence assigned to the new patient.
    pub fn insert(&mut self, name: impl Into<String>, priority_class: u8) -> u64 {
        let arrival = self.next_arrival;
        let patient = Patient::new(name, priority_class, arrival);

        debug!(
            name = %patient.name(),
            priority = priority_class,
            arrival,
            "Inserting patient"
        );

        self.heap.push(patient);
        self.sift_up(self.heap.len() - 1);
        self.next_arrival += 1;

        arrival
    }

    /// Returns the most urgent patient without removing it.
    ///
    /// # Errors
    ///
    /// `QueueError::EmptyQueue` if nobody is waiting.
    pub fn peek(&self) -> Result<&Patient> {
        self.heap.first().ok_or(QueueError::EmptyQueue)
    }

    /// Removes and returns the most urgent patient.
    ///
    /// # Errors
    ///
    /// `QueueError::EmptyQueue` if nobody is waiting. The queue is left
    /// untouched in that case.
    pub fn remove(&mut self) -> Result<Patient> {
        if self.heap.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        // Last element takes the root's slot
        let patient = self.heap.swap_remove(0);
        if self.heap.len() > 1 {
            self.sift_down(0);
        }

        debug!(
            name = %patient.name(),
            priority = patient.priority_class(),
            arrival = patient.arrival_sequence(),
            remaining = self.heap.len(),
            "Removed patient"
        );

        Ok(patient)
    }

    /// Returns the number of patients waiting.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the arrival sequence the next insert will receive.
    pub fn next_arrival(&self) -> u64 {
        self.next_arrival
    }

    /// Iterates over patients in heap-array order.
    ///
    /// This is level order, not the order patients will be called.
    pub fn iter(&self) -> slice::Iter<'_, Patient> {
        self.heap.iter()
    }

    /// Renders every patient, one row each, in heap-array order.
    ///
    /// Like [`iter`](Self::iter), the listing reflects heap layout rather than
    /// call order.
    pub fn render_all(&self) -> String {
        self.heap.iter().map(Patient::render).collect()
    }

    /// Returns true if every parent is at least as urgent as its children.
    ///
    /// Diagnostic for tests; the heap property always holds between calls.
    #[doc(hidden)]
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len())
            .all(|i| !self.heap[i].is_more_urgent_than(&self.heap[parent(i)]))
    }

    /// Moves the element at `index` toward the root until its parent is at
    /// least as urgent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.heap[index].is_more_urgent_than(&self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` toward the leaves until both children are
    /// no more urgent.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);

            if left >= len {
                break;
            }

            // Without a right child only the left one can win
            let child = if right >= len
                || self.heap[left].is_more_urgent_than(&self.heap[right])
            {
                left
            } else {
                right
            };

            if !self.heap[child].is_more_urgent_than(&self.heap[index]) {
                break;
            }
            self.heap.swap(index, child);
            index = child;
        }
    }
}

impl<'a> IntoIterator for &'a PatientQueue {
    type Item = &'a Patient;
    type IntoIter = slice::Iter<'a, Patient>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}
