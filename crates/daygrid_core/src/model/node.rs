//! Render-ready layout output.
//!
//! A renderer maps these values to geometry on its own: column width is
//! `track_width / siblings`, horizontal offset is `index * column_width`,
//! vertical offset is `start` and block height is `duration`.

use super::event::{EventId, Minute};
use serde::{Deserialize, Serialize};

/// Placement of one event inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: EventId,
    pub start: Minute,
    /// `end - start`, always positive.
    pub duration: Minute,
    /// Column slot, strictly below the owning group's `siblings`.
    pub index: usize,
}

/// Placement of every event of one `EventGroup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeGroup {
    /// Same id as the source `EventGroup`.
    pub id: usize,
    /// Nodes in column-assignment order.
    pub nodes: Vec<Node>,
    /// Peak number of simultaneously active events; the column count.
    pub siblings: usize,
}
