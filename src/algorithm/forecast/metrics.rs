//! Summary metrics over a projected series

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ConfidenceInterval, DailyCountPoint, ForecastPoint};
use crate::utils::round_to_one;

/// Number of trailing historical days the forecast is compared against
pub const RECENT_DAYS: usize = 7;

/// Direction of the projected workload relative to recent history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Forecast average more than 10% above the recent average
    Increasing,
    /// Forecast average more than 10% below the recent average
    Decreasing,
    /// Within 10% either way
    #[default]
    Stable,
}

impl TrendDirection {
    /// Classify a forecast average against a recent historical average
    #[must_use]
    pub fn classify(forecast_avg: f64, recent_avg: f64) -> Self {
        if forecast_avg > recent_avg * 1.1 {
            Self::Increasing
        } else if forecast_avg < recent_avg * 0.9 {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }

    /// Lower-case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The busiest projected day, serialized as the full forecast point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakDay {
    /// Date of the peak; `None` for an empty forecast
    pub date: Option<NaiveDate>,
    /// Projected admissions on that date
    pub value: u64,
    /// Always false for a projected peak
    #[serde(default)]
    pub is_historical: bool,
    /// Band of the peak point; absent for an empty forecast
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<ConfidenceInterval>,
}

impl From<&ForecastPoint> for PeakDay {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            date: Some(point.date),
            value: point.value,
            is_historical: point.is_historical,
            confidence: Some(point.confidence),
        }
    }
}

/// Headline numbers for a forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMetrics {
    /// Sum of projected values
    pub expected_total: u64,
    /// Busiest projected day
    pub peak_day: PeakDay,
    /// Mean projected value, one decimal
    pub average_daily: f64,
    /// Direction relative to the last week of history
    pub trend: TrendDirection,
}

/// First point with the maximum value
#[must_use]
pub fn find_peak_day(points: &[ForecastPoint]) -> PeakDay {
    points
        .iter()
        .fold(None::<&ForecastPoint>, |peak, point| match peak {
            Some(best) if best.value >= point.value => Some(best),
            _ => Some(point),
        })
        .map(PeakDay::from)
        .unwrap_or_default()
}

/// Sum of the last week of counts divided by seven
///
/// Shorter histories are still divided by seven.
#[must_use]
pub fn recent_average(history: &[DailyCountPoint]) -> f64 {
    let start = history.len().saturating_sub(RECENT_DAYS);
    let sum: u64 = history[start..].iter().map(|p| u64::from(p.count)).sum();
    sum as f64 / RECENT_DAYS as f64
}

/// Compute the headline metrics for a forecast against its history
#[must_use]
pub fn calculate_forecast_metrics(
    points: &[ForecastPoint],
    history: &[DailyCountPoint],
) -> ForecastMetrics {
    let expected_total: u64 = points.iter().map(|p| p.value).sum();
    let average_daily = if points.is_empty() {
        0.0
    } else {
        expected_total as f64 / points.len() as f64
    };

    let recent = recent_average(history);
    let trend = TrendDirection::classify(average_daily, recent);
    log::debug!(
        "Forecast average {average_daily:.2} vs recent average {recent:.2}: {trend}"
    );

    ForecastMetrics {
        expected_total,
        peak_day: find_peak_day(points),
        average_daily: round_to_one(average_daily),
        trend,
    }
}
