//! Text span parsing for command-line and editor input.
//!
//! Parsing only checks shape; bounds are left to `EventStore::add_event` and
//! `merge` so out-of-range values get their specific error.

use super::event_store::StoreError;
use crate::model::event::Minute;
use once_cell::sync::Lazy;
use regex::Regex;

static SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-?\d+)\s*-\s*(-?\d+)\s*$").expect("valid span regex"));

/// Parses `START-END` (for example `540-600`) into minute offsets.
///
/// A leading `-` on either side is kept, so `-1-5` reads as `(-1, 5)`.
pub fn parse_span(text: &str) -> Result<(Minute, Minute), StoreError> {
    let invalid = || StoreError::InvalidSpan(text.trim().to_string());
    let captures = SPAN_RE.captures(text).ok_or_else(invalid)?;
    let start = captures[1].parse::<Minute>().map_err(|_| invalid())?;
    let end = captures[2].parse::<Minute>().map_err(|_| invalid())?;
    Ok((start, end))
}
