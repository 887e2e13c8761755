//! Fulfillment-time parsing.
//!
//! Suppliers describe fulfillment as free text ("24 hours", "2-3 days",
//! "ships within 1 day"). Sorting needs a comparable number, so the first
//! `<number>[-<number>] <unit>` pattern is reduced to a mean duration in
//! hours. Text with no recognizable pattern maps to positive infinity:
//! such items rank last under the fulfillment sort, and the sort itself
//! stays total over arbitrary input.

use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)(?:\s*-\s*(\d+(?:\.\d+)?))?\s*(hours?|days?)")
        .expect("duration pattern compiles")
});

/// Extract a comparable duration in hours from a free-text fulfillment
/// estimate. Returns `f64::INFINITY` when no duration is recognizable.
pub fn parse_hours(text: &str) -> f64 {
    let caps = match DURATION_RE.captures(text) {
        Some(caps) => caps,
        None => return f64::INFINITY,
    };

    let min: f64 = match caps[1].parse() {
        Ok(v) => v,
        Err(_) => return f64::INFINITY,
    };
    let max: f64 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(min);

    let avg = (min + max) / 2.0;
    if caps[3].to_lowercase().starts_with("day") {
        avg * 24.0
    } else {
        avg
    }
}
