//! Data models
//!
//! Input records for the aggregation engine and the series types consumed and
//! produced by the forecast engine.

pub mod record;
pub mod series;

pub use record::PatientRecord;
pub use series::{ConfidenceInterval, DailyCountPoint, ForecastPoint, HistoricalPoint};
