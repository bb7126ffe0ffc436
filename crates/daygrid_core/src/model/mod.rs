//! Day layout data model.
//!
//! # Responsibility
//! - Define the input record (`Event`) and the derived layout values
//!   (`EventGroup`, `Node`, `NodeGroup`).
//! - Own the bounds check shared by every layout entry point.
//!
//! # Invariants
//! - Valid events satisfy `DAY_START <= start < end <= DAY_END`.
//! - Derived values carry no back-reference to input events beyond their id.

pub mod event;
pub mod group;
pub mod node;
