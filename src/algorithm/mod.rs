//! Algorithm implementations for the analytics dashboard
//!
//! This module contains the two computation engines: descriptive aggregation
//! over patient records and short-horizon workload forecasting.

pub mod aggregation;
pub mod forecast;
