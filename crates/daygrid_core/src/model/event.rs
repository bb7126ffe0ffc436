//! Event input model.
//!
//! # Responsibility
//! - Define the caller-supplied interval record laid out on the day axis.
//! - Provide the bounds predicate gating every layout call.
//!
//! # Invariants
//! - A valid event starts at or after `DAY_START`, ends at or before
//!   `DAY_END`, and has a strictly positive duration.
//! - Construction never validates; validation is explicit so invalid input
//!   can still be handed to `merge` and rejected there.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller-assigned event identifier, unique within one input list.
pub type EventId = u32;

/// Offset on the day axis, in minutes from the start of the window.
pub type Minute = i32;

/// First minute of the day window.
pub const DAY_START: Minute = 0;
/// Last minute (exclusive) of the day window.
pub const DAY_END: Minute = 720;

/// One calendar item, defined only by its offsets on the day axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Inclusive start offset.
    pub start: Minute,
    /// Exclusive end offset.
    pub end: Minute,
}

impl Event {
    /// Creates an event without checking bounds.
    pub fn new(id: EventId, start: Minute, end: Minute) -> Self {
        Self { id, start, end }
    }

    /// Length of the event in minutes. Only meaningful for valid events.
    pub fn duration(&self) -> Minute {
        self.end - self.start
    }

    /// Whether the two half-open windows share at least one minute.
    ///
    /// Touching windows (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Checks the day-window bounds.
    ///
    /// # Errors
    /// - `StartBeforeDayStart` when `start < DAY_START`.
    /// - `EndAfterDayEnd` when `end > DAY_END`.
    /// - `EmptyWindow` when `end <= start`.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.start < DAY_START {
            return Err(EventValidationError::StartBeforeDayStart { start: self.start });
        }
        if self.end > DAY_END {
            return Err(EventValidationError::EndAfterDayEnd { end: self.end });
        }
        if self.end <= self.start {
            return Err(EventValidationError::EmptyWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Returns whether `event` fits the day window with a positive duration.
pub fn is_valid_event(event: &Event) -> bool {
    event.start < event.end && event.start >= DAY_START && event.end <= DAY_END
}

/// Reason an event falls outside the layout domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    StartBeforeDayStart { start: Minute },
    EndAfterDayEnd { end: Minute },
    /// Zero or negative duration.
    EmptyWindow { start: Minute, end: Minute },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartBeforeDayStart { start } => {
                write!(f, "start ({start}) must be >= {DAY_START}")
            }
            Self::EndAfterDayEnd { end } => write!(f, "end ({end}) must be <= {DAY_END}"),
            Self::EmptyWindow { start, end } => {
                write!(f, "end ({end}) must be > start ({start})")
            }
        }
    }
}

impl Error for EventValidationError {}

/// Rejection of a whole layout call because one input event is invalid.
///
/// Raised before any grouping work; no partial result accompanies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    /// First offending event, in input order.
    pub event_id: EventId,
    pub reason: EventValidationError,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid events: event {}: {}", self.event_id, self.reason)
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}
