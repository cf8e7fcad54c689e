//! Clock helpers for time-derived identifiers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond clock signature, swappable so tests can pin time.
pub type MillisClock = fn() -> u64;

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Returns `now`, bumped past `last` so successive values strictly increase even when the clock
/// stalls or goes backwards.
pub fn next_monotonic(last: u64, now: u64) -> u64 {
    now.max(last.saturating_add(1))
}
