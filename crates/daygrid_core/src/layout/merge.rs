//! Overlap clustering of events into groups.
//!
//! # Responsibility
//! - Reject the whole input when any event is out of bounds.
//! - Partition valid events into maximal overlapping groups in time order.
//!
//! # Invariants
//! - Touching events (`a.end == b.start`) land in separate groups.
//! - `group[i].end <= group[i + 1].start` for every adjacent pair.
//! - Every input event appears in exactly one group.

use crate::model::event::{Event, ValidationError};
use crate::model::group::EventGroup;
use log::{debug, warn};

/// Merges events into time-ordered, mutually disjoint groups.
///
/// Takes the events by value and sorts its own copy by `(start, end)`, so the
/// caller's sequence is never reordered behind its back.
///
/// # Errors
/// Returns `ValidationError` for the first event (input order) that fails
/// `Event::validate`. No grouping happens in that case.
pub fn merge(mut events: Vec<Event>) -> Result<Vec<EventGroup>, ValidationError> {
    ensure_valid(&events)?;

    events.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
    let event_count = events.len();

    let mut sorted = events.into_iter();
    let Some(first) = sorted.next() else {
        return Ok(Vec::new());
    };

    let mut groups = Vec::new();
    let mut current = open_group(0, first);
    for event in sorted {
        if event.start >= current.end {
            let next = open_group(groups.len() + 1, event);
            groups.push(std::mem::replace(&mut current, next));
        } else {
            current.end = current.end.max(event.end);
            current.events.push(event);
        }
    }
    groups.push(current);

    debug!(
        "event=layout_merge module=layout status=ok events={} groups={}",
        event_count,
        groups.len()
    );
    Ok(groups)
}

fn ensure_valid(events: &[Event]) -> Result<(), ValidationError> {
    for event in events {
        if let Err(reason) = event.validate() {
            warn!(
                "event=layout_merge module=layout status=rejected event_id={} reason={}",
                event.id, reason
            );
            return Err(ValidationError {
                event_id: event.id,
                reason,
            });
        }
    }
    Ok(())
}

fn open_group(id: usize, first: Event) -> EventGroup {
    EventGroup {
        id,
        events: vec![first],
        start: first.start,
        end: first.end,
    }
}
