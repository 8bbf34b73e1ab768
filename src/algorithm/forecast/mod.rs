//! Workload forecasting engine
//!
//! This module projects a short horizon of daily admissions from a historical
//! count series, then derives summary metrics and resource guidance from the
//! projection. It is a heuristic, not a statistical model: smoothing, a
//! constant linear trend and a band derived from the historical spread.

pub mod metrics;
pub mod projection;
pub mod recommendations;
pub mod series;
pub mod smoothing;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::ForecastConfig;
use crate::models::{DailyCountPoint, ForecastPoint, HistoricalPoint};
use crate::utils::logging::{log_operation_complete, log_operation_start};

pub use metrics::{
    ForecastMetrics, PeakDay, TrendDirection, calculate_forecast_metrics, find_peak_day,
};
pub use projection::{estimate_trend, generate_forecast};
pub use recommendations::{Recommendations, generate_recommendations};
pub use series::daily_admission_counts;
pub use smoothing::{SmoothingMethod, exponential_smoothing, moving_average};

/// Forecast with its history, metrics and guidance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// The series the forecast was computed from, marked historical
    pub historical: Vec<HistoricalPoint>,
    /// Projected points, one per day after the history
    pub forecast: Vec<ForecastPoint>,
    /// Headline numbers
    pub metrics: ForecastMetrics,
    /// Resource guidance
    pub recommendations: Recommendations,
}

/// Forecast `days` days ahead with the named method and default parameters
#[must_use]
pub fn compute_forecast(
    history: &[DailyCountPoint],
    days: u32,
    method: SmoothingMethod,
) -> ForecastReport {
    let config = ForecastConfig::default()
        .with_horizon(days)
        .with_method(method);
    compute_forecast_with(history, &config)
}

/// Forecast with full control over the parameters
#[must_use]
pub fn compute_forecast_with(
    history: &[DailyCountPoint],
    config: &ForecastConfig,
) -> ForecastReport {
    let start = Instant::now();
    log_operation_start("Forecasting from daily counts", history.len());

    let forecast = generate_forecast(history, config);
    let metrics = calculate_forecast_metrics(&forecast, history);
    let recommendations = generate_recommendations(&metrics);

    log_operation_complete("projected", forecast.len(), Some(start.elapsed()));

    ForecastReport {
        historical: history.iter().copied().map(HistoricalPoint::from).collect(),
        forecast,
        metrics,
        recommendations,
    }
}

impl ForecastReport {
    /// Human-readable multi-line summary
    #[must_use]
    pub fn summary(&self) -> String {
        let metrics = &self.metrics;

        let mut summary = String::new();
        summary.push_str("Workload Forecast:\n");
        if let (Some(first), Some(last)) = (self.historical.first(), self.historical.last()) {
            summary.push_str(&format!(
                "  History: {} to {} ({} days)\n",
                first.date,
                last.date,
                self.historical.len()
            ));
        }
        summary.push_str(&format!("  Expected Total: {}\n", metrics.expected_total));
        summary.push_str(&format!("  Average Daily: {:.1}\n", metrics.average_daily));
        if let Some(date) = metrics.peak_day.date {
            summary.push_str(&format!("  Peak Day: {date} ({})\n", metrics.peak_day.value));
        }
        summary.push_str(&format!("  Trend: {}\n", metrics.trend));

        if !self.forecast.is_empty() {
            summary.push_str("\nProjection:\n");
            for point in &self.forecast {
                summary.push_str(&format!(
                    "    {}: {} [{}, {}]\n",
                    point.date, point.value, point.confidence.lower, point.confidence.upper
                ));
            }
        }

        summary.push_str("\nRecommendations:\n");
        summary.push_str(&format!("  Staffing: {}\n", self.recommendations.staffing));
        summary.push_str(&format!("  Beds: {}\n", self.recommendations.beds));
        summary.push_str(&format!("  Equipment: {}\n", self.recommendations.equipment));

        summary
    }
}
