//! Two-stage day layout: overlap clustering, then column assignment.
//!
//! # Responsibility
//! - Turn a flat list of events into render-ready node groups.
//! - Stay pure: no shared state, no I/O, every call independent.
//!
//! # Invariants
//! - Validation runs before any grouping; a rejected call returns nothing.
//! - Node groups keep the id and time order of their event groups.

pub mod columns;
pub mod merge;

use crate::model::event::{Event, ValidationError};
use crate::model::node::NodeGroup;

pub use columns::generate_node_group;
pub use merge::merge;

/// Runs `merge` and lays out every resulting group.
///
/// # Errors
/// Propagates the `ValidationError` from `merge` unchanged.
pub fn layout_day(events: Vec<Event>) -> Result<Vec<NodeGroup>, ValidationError> {
    let groups = merge(events)?;
    Ok(groups.iter().map(generate_node_group).collect())
}
