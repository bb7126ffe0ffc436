//! Caller-facing use-case services over the pure layout core.
//!
//! # Responsibility
//! - Hold caller-owned mutable event state between layout calls.
//! - Turn loose text input into checked event spans.
//!
//! # Invariants
//! - Services never keep shared or global state; every store is owned by
//!   its caller.

pub mod event_store;
pub mod input;
