//! Logging utilities for operation tracking
//!
//! This module provides utilities for consistent log output.

pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_operation_complete, log_operation_start, log_skipped};
