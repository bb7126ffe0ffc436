//! Event group model.
//!
//! # Invariants
//! - `start` is the minimum start and `end` the maximum end of `events`.
//! - Events inside a group form one connected overlap chain.
//! - Groups returned by one `merge` call never overlap each other.

use super::event::{Event, Minute};
use serde::{Deserialize, Serialize};

/// Maximal cluster of transitively overlapping events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventGroup {
    /// Zero-based position of the group in the `merge` output.
    pub id: usize,
    /// Members sorted by `(start, end)`.
    pub events: Vec<Event>,
    pub start: Minute,
    pub end: Minute,
}

impl EventGroup {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
