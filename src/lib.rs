//! A Rust library for healthcare dashboard analytics: descriptive aggregation
//! over patient admission records and short-horizon workload forecasting.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod store;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ForecastConfig;
pub use error::{CareMetricsError, Result};
pub use models::{
    ConfidenceInterval, DailyCountPoint, ForecastPoint, HistoricalPoint, PatientRecord,
};
pub use store::RecordStore;

// Filtering capabilities
pub use filter::{DashboardFilters, DateRange, RecordFilter};

// Aggregation engine
pub use algorithm::aggregation::{DashboardMetrics, aggregate, compute_dashboard_metrics};

// Forecast engine
pub use algorithm::forecast::{
    ForecastReport, SmoothingMethod, TrendDirection, compute_forecast, compute_forecast_with,
    daily_admission_counts,
};
