//! Mutable event store driving the layout core.
//!
//! # Responsibility
//! - Add and remove events with the editor's input checks.
//! - Generate ids as `max existing id + 1`.
//! - Re-run the layout pipeline on demand.
//!
//! # Invariants
//! - Events accepted through `add_event` always pass `is_valid_event`.
//! - Ids are unique within one store.
//! - `layout` never reorders the stored events.

use crate::layout::layout_day;
use crate::model::event::{Event, EventId, Minute, ValidationError, DAY_END, DAY_START};
use crate::model::node::NodeGroup;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for store mutations and span input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `start` outside `DAY_START..DAY_END`.
    StartOutOfRange(Minute),
    /// `end` outside `DAY_START + 1..=DAY_END`.
    EndOutOfRange(Minute),
    /// `end` is not after `start`.
    EmptyWindow { start: Minute, end: Minute },
    /// No event with this id in the store.
    EventNotFound(EventId),
    /// Text could not be read as `START-END`.
    InvalidSpan(String),
    /// A stored event was rejected by the layout pipeline.
    Validation(ValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartOutOfRange(start) => write!(
                f,
                "start must be within {DAY_START} ~ {}, got {start}",
                DAY_END - 1
            ),
            Self::EndOutOfRange(end) => write!(
                f,
                "end must be within {} ~ {DAY_END}, got {end}",
                DAY_START + 1
            ),
            Self::EmptyWindow { start, end } => {
                write!(f, "end ({end}) must be larger than start ({start})")
            }
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::InvalidSpan(text) => {
                write!(f, "invalid span `{text}`: expected START-END")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Caller-owned list of events laid out per change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing events as-is.
    ///
    /// No bounds or id checks run here; invalid events surface as
    /// `StoreError::Validation` from `layout`.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Appends a new event after checking it against the day window.
    ///
    /// # Contract
    /// - Checks run in order: start range, end range, positive duration.
    /// - The new id is one above the current maximum, or 0 when empty.
    pub fn add_event(&mut self, start: Minute, end: Minute) -> Result<Event, StoreError> {
        if !(DAY_START..DAY_END).contains(&start) {
            return Err(StoreError::StartOutOfRange(start));
        }
        if !(DAY_START + 1..=DAY_END).contains(&end) {
            return Err(StoreError::EndOutOfRange(end));
        }
        if end <= start {
            return Err(StoreError::EmptyWindow { start, end });
        }

        let event = Event::new(self.next_id(), start, end);
        self.events.push(event);
        debug!(
            "event=store_add module=service status=ok event_id={} total={}",
            event.id,
            self.events.len()
        );
        Ok(event)
    }

    /// Removes the event with `id`, wherever it sits in the store.
    pub fn remove_event(&mut self, id: EventId) -> Result<Event, StoreError> {
        let position = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(StoreError::EventNotFound(id))?;
        let removed = self.events.remove(position);
        debug!(
            "event=store_remove module=service status=ok event_id={} total={}",
            id,
            self.events.len()
        );
        Ok(removed)
    }

    /// Lays out a snapshot of the current events.
    ///
    /// # Errors
    /// Returns `StoreError::Validation` when an event seeded via
    /// `from_events` is out of bounds.
    pub fn layout(&self) -> Result<Vec<NodeGroup>, StoreError> {
        let node_groups = layout_day(self.events.clone())?;
        info!(
            "event=store_layout module=service status=ok events={} groups={}",
            self.events.len(),
            node_groups.len()
        );
        Ok(node_groups)
    }

    fn next_id(&self) -> EventId {
        self.events
            .iter()
            .map(|event| event.id)
            .max()
            .map_or(0, |max_id| max_id + 1)
    }
}
