//! Time series models for forecasting
//!
//! Daily admission counts go in, projected points with confidence bands come
//! out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of admissions on one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCountPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Admissions on that date
    pub count: u32,
}

impl DailyCountPoint {
    /// Create a new point
    #[must_use]
    pub const fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// One day of history as charted next to the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Admissions on that date
    pub value: u64,
    /// Always true
    pub is_historical: bool,
}

impl From<DailyCountPoint> for HistoricalPoint {
    fn from(point: DailyCountPoint) -> Self {
        Self {
            date: point.date,
            value: u64::from(point.count),
            is_historical: true,
        }
    }
}

/// Heuristic band around a projected value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound, never negative
    pub lower: u64,
    /// Upper bound, never below `lower`
    pub upper: u64,
}

impl ConfidenceInterval {
    /// Whether `value` lies inside the band, bounds included
    #[must_use]
    pub const fn contains(&self, value: u64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// One projected day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Projected calendar date
    pub date: NaiveDate,
    /// Projected admissions
    pub value: u64,
    /// Always false; kept so charts can merge history and forecast
    pub is_historical: bool,
    /// Heuristic confidence band
    pub confidence: ConfidenceInterval,
}
