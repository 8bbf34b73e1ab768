//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `items` - Number of input items the operation will process
pub fn log_operation_start(operation: &str, items: usize) {
    log::debug!("{operation} over {items} items");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} items in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} items");
    }
}

/// Log skipped records with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation that skipped records
/// * `skipped` - Number of records left out
/// * `reason` - Why they were left out
pub fn log_skipped(operation: &str, skipped: usize, reason: &str) {
    if skipped > 0 {
        log::warn!("{operation}: skipped {skipped} records ({reason})");
    }
}
