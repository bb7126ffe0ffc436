//! Core layout logic for DayGrid.
//! Places time-interval events of one day window into side-by-side columns.

pub mod layout;
pub mod logging;
pub mod model;
pub mod service;

pub use layout::{generate_node_group, layout_day, merge};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::event::{
    is_valid_event, Event, EventId, EventValidationError, Minute, ValidationError, DAY_END,
    DAY_START,
};
pub use model::group::EventGroup;
pub use model::node::{Node, NodeGroup};
pub use service::event_store::{EventStore, StoreError};
pub use service::input::parse_span;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
