//! Shared utilities
//!
//! Date handling, logging helpers and small numeric helpers used across the
//! engines.

pub mod date_utils;
pub mod envelope;
pub mod logging;

pub use date_utils::{calendar_date, days_between, parse_date, parse_timestamp};
pub use envelope::success_envelope;

/// Round to one decimal place
#[must_use]
pub fn round_to_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a non-negative float to the nearest count, clamping negatives to 0
#[must_use]
pub fn round_to_count(value: f64) -> u64 {
    // Saturating float-to-int conversion; NaN maps to 0
    value.max(0.0).round() as u64
}
