//! Input controls that constrain raw user input before it reaches the form.
//!
//! These play the part of a range slider and a time picker: the slider can
//! only ever produce a value inside its bounds, and the time picker only a
//! well-formed time of day (or nothing at all).

use chrono::{NaiveTime, Timelike};

use crate::error::{CriteriaError, Result};
use crate::types::{MAX_DISTANCE_KM, MIN_DISTANCE_KM};

/// Position a distance slider would settle on for `raw` km.
pub fn slider_value(raw: i64) -> u32 {
    raw.clamp(MIN_DISTANCE_KM as i64, MAX_DISTANCE_KM as i64) as u32
}

/// Accept `raw` if it is a time of day, returning it unchanged.
///
/// `HH:MM` and `HH:MM:SS` are accepted. An empty string is accepted too,
/// since a cleared time input is empty rather than invalid.
pub fn time_input(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    ["%H:%M", "%H:%M:%S"]
        .into_iter()
        .find(|fmt| is_exact(raw, fmt))
        .map(|_| raw.to_string())
        .ok_or_else(|| CriteriaError::InvalidTimeOfDay {
            value: raw.to_string(),
        })
}

/// `raw` parses with `fmt` and prints back identically, so no padding,
/// stray whitespace or leap seconds slip through.
fn is_exact(raw: &str, fmt: &str) -> bool {
    NaiveTime::parse_from_str(raw, fmt)
        .map(|t| t.nanosecond() < 1_000_000_000 && t.format(fmt).to_string() == raw)
        .unwrap_or(false)
}
