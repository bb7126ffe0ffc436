//! Column assignment inside one event group.
//!
//! # Responsibility
//! - Give every event of a group a column index.
//! - Record the group's peak concurrency as its column count.
//!
//! # Invariants
//! - At one timestamp, end touches are handled before start touches, so a
//!   column freed at `t` can be claimed by an event starting at `t`.
//! - Simultaneous touches of the same kind are handled in ascending event id.
//! - New events take the leftmost free column, appending only when all
//!   columns are occupied.

use crate::model::event::{Event, EventId, Minute};
use crate::model::group::EventGroup;
use crate::model::node::{Node, NodeGroup};
use log::trace;

/// Sweep marker for one side of an event. `End` sorts before `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TouchKind {
    End,
    Start,
}

#[derive(Debug, Clone, Copy)]
struct Touch<'a> {
    at: Minute,
    kind: TouchKind,
    /// Position of `event` inside the group.
    position: usize,
    event: &'a Event,
}

impl Touch<'_> {
    fn sort_key(&self) -> (Minute, TouchKind, EventId, usize) {
        (self.at, self.kind, self.event.id, self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Free,
    Occupied(EventId),
}

/// Converts one event group into its render-ready node group.
///
/// Produces exactly one node per event. A lone event always gets column 0
/// of a single column. An empty group yields no nodes and `siblings = 0`.
///
/// Events are expected to satisfy `is_valid_event`, as `merge` guarantees.
/// A hand-built event with `end <= start` still gets a node, but keeps its
/// column until the end of the sweep.
pub fn generate_node_group(group: &EventGroup) -> NodeGroup {
    if let [only] = group.events.as_slice() {
        return NodeGroup {
            id: group.id,
            nodes: vec![node_at(only, 0)],
            siblings: 1,
        };
    }

    let mut touches: Vec<Touch<'_>> = group
        .events
        .iter()
        .enumerate()
        .flat_map(|(position, event)| {
            [
                Touch {
                    at: event.start,
                    kind: TouchKind::Start,
                    position,
                    event,
                },
                Touch {
                    at: event.end,
                    kind: TouchKind::End,
                    position,
                    event,
                },
            ]
        })
        .collect();
    touches.sort_by_key(|touch| touch.sort_key());

    let mut nodes = Vec::with_capacity(group.events.len());
    let mut slots: Vec<Slot> = Vec::new();
    // Column held by each event, by position; released by index, not id.
    let mut held: Vec<Option<usize>> = vec![None; group.events.len()];
    let mut current_siblings = 0usize;
    let mut max_siblings = 0usize;

    for at_timestamp in touches.chunk_by(|a, b| a.at == b.at) {
        for touch in at_timestamp {
            match touch.kind {
                TouchKind::Start => {
                    current_siblings += 1;
                    let index = claim_slot(&mut slots, touch.event.id);
                    held[touch.position] = Some(index);
                    nodes.push(node_at(touch.event, index));
                }
                TouchKind::End => {
                    if let Some(index) = held[touch.position].take() {
                        current_siblings -= 1;
                        slots[index] = Slot::Free;
                    }
                }
            }
        }
        max_siblings = max_siblings.max(current_siblings);
    }

    trace!(
        "event=layout_columns module=layout status=ok group_id={} nodes={} siblings={}",
        group.id,
        nodes.len(),
        max_siblings
    );

    NodeGroup {
        id: group.id,
        nodes,
        siblings: max_siblings,
    }
}

fn node_at(event: &Event, index: usize) -> Node {
    Node {
        id: event.id,
        start: event.start,
        duration: event.duration(),
        index,
    }
}

fn claim_slot(slots: &mut Vec<Slot>, id: EventId) -> usize {
    match slots.iter().position(|slot| *slot == Slot::Free) {
        Some(index) => {
            slots[index] = Slot::Occupied(id);
            index
        }
        None => {
            slots.push(Slot::Occupied(id));
            slots.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{claim_slot, generate_node_group, Slot};
    use crate::model::event::Event;
    use crate::model::group::EventGroup;

    fn group_of(events: Vec<Event>) -> EventGroup {
        let start = events.iter().map(|event| event.start).min().unwrap_or(0);
        let end = events.iter().map(|event| event.end).max().unwrap_or(0);
        EventGroup {
            id: 0,
            events,
            start,
            end,
        }
    }

    #[test]
    fn slot_reuse_prefers_leftmost_free() {
        let mut slots = Vec::new();
        assert_eq!(claim_slot(&mut slots, 1), 0);
        assert_eq!(claim_slot(&mut slots, 2), 1);
        assert_eq!(claim_slot(&mut slots, 3), 2);
        slots[1] = Slot::Free;
        slots[0] = Slot::Free;
        assert_eq!(claim_slot(&mut slots, 4), 0);
        assert_eq!(slots, vec![Slot::Occupied(4), Slot::Free, Slot::Occupied(3)]);
    }

    #[test]
    fn lone_event_takes_full_width() {
        let node_group = generate_node_group(&group_of(vec![Event::new(5, 30, 150)]));
        assert_eq!(node_group.siblings, 1);
        assert_eq!(node_group.nodes.len(), 1);
        assert_eq!(node_group.nodes[0].index, 0);
        assert_eq!(node_group.nodes[0].duration, 120);
    }

    #[test]
    fn empty_group_has_no_columns() {
        let node_group = generate_node_group(&group_of(Vec::new()));
        assert!(node_group.nodes.is_empty());
        assert_eq!(node_group.siblings, 0);
    }

    #[test]
    fn boundary_end_frees_column_before_start() {
        // 0..60 spans both 0..30 and 30..60, which share column 0.
        let node_group = generate_node_group(&group_of(vec![
            Event::new(0, 0, 30),
            Event::new(3, 0, 60),
            Event::new(1, 30, 60),
        ]));
        assert_eq!(node_group.siblings, 2);
        let index_of = |id: u32| {
            node_group
                .nodes
                .iter()
                .find(|node| node.id == id)
                .map(|node| node.index)
        };
        assert_eq!(index_of(0), Some(0));
        assert_eq!(index_of(3), Some(1));
        assert_eq!(index_of(1), Some(0));
    }

    #[test]
    fn simultaneous_starts_follow_event_id() {
        let node_group = generate_node_group(&group_of(vec![
            Event::new(8, 100, 200),
            Event::new(2, 100, 150),
        ]));
        assert_eq!(node_group.nodes[0].id, 2);
        assert_eq!(node_group.nodes[0].index, 0);
        assert_eq!(node_group.nodes[1].id, 8);
        assert_eq!(node_group.nodes[1].index, 1);
    }

    #[test]
    fn siblings_is_peak_not_final_concurrency() {
        let node_group = generate_node_group(&group_of(vec![
            Event::new(0, 0, 100),
            Event::new(1, 10, 20),
            Event::new(2, 10, 20),
            Event::new(3, 50, 60),
        ]));
        assert_eq!(node_group.siblings, 3);
        let late = node_group.nodes.iter().find(|node| node.id == 3).unwrap();
        assert_eq!(late.index, 1);
    }

    #[test]
    fn duplicate_ids_release_their_own_column() {
        // Both events carry id 1; the short one ending must not free the long one's column.
        let node_group = generate_node_group(&group_of(vec![
            Event::new(1, 0, 20),
            Event::new(1, 5, 10),
            Event::new(2, 12, 18),
        ]));
        let indices: Vec<(u32, usize)> = node_group
            .nodes
            .iter()
            .map(|node| (node.id, node.index))
            .collect();
        assert_eq!(indices, vec![(1, 0), (1, 1), (2, 1)]);
        assert_eq!(node_group.siblings, 2);
    }

    #[test]
    fn empty_window_event_does_not_underflow() {
        let node_group = generate_node_group(&group_of(vec![
            Event::new(0, 10, 40),
            Event::new(1, 20, 20),
            Event::new(2, 30, 25),
        ]));
        assert_eq!(node_group.nodes.len(), 3);
        assert!(node_group
            .nodes
            .iter()
            .all(|node| node.index < node_group.siblings));
    }
}
