//! Trend estimation and forward projection
//!
//! The projection starts from the last smoothed value and adds a constant
//! daily trend. The band around each point is the historical standard
//! deviation, widened linearly with the horizon.

use chrono::Days;

use crate::algorithm::aggregation::statistics::population_std_dev;
use crate::config::ForecastConfig;
use crate::models::{ConfidenceInterval, DailyCountPoint, ForecastPoint};
use crate::utils::round_to_count;

/// Daily trend from two adjacent windows at the end of the history
///
/// `(mean(recent) − mean(preceding)) / window`, where `recent` is the last
/// `window` values and `preceding` the `window` values before them. Without a
/// full preceding window the trend is 0.
#[must_use]
pub fn estimate_trend(values: &[f64], window: usize) -> f64 {
    if window == 0 || values.len() < 2 * window {
        return 0.0;
    }

    let split = values.len() - window;
    let recent = &values[split..];
    let preceding = &values[split - window..split];

    let avg_recent = recent.iter().sum::<f64>() / window as f64;
    let avg_preceding = preceding.iter().sum::<f64>() / window as f64;
    (avg_recent - avg_preceding) / window as f64
}

/// Project `config.horizon_days` points past the end of the history
///
/// The history is taken as given: sorted ascending, one point per day.
/// An empty history yields an empty forecast.
#[must_use]
pub fn generate_forecast(
    history: &[DailyCountPoint],
    config: &ForecastConfig,
) -> Vec<ForecastPoint> {
    let Some(last) = history.last() else {
        return Vec::new();
    };

    let values: Vec<f64> = history.iter().map(|p| f64::from(p.count)).collect();
    let smoothed = config
        .method
        .smooth(&values, config.moving_average_window, config.smoothing_alpha);
    let last_smoothed = smoothed.last().copied().unwrap_or(0.0);

    let trend = estimate_trend(&values, config.trend_window);
    let std_dev = population_std_dev(&values);

    log::debug!(
        "Projecting {} days with {}: last smoothed {last_smoothed:.3}, trend {trend:.3}/day, std-dev {std_dev:.3}",
        config.horizon_days,
        config.method
    );

    (1..=config.horizon_days)
        .map_while(|i| {
            let step = f64::from(i);
            let date = last.date.checked_add_days(Days::new(u64::from(i)))?;

            let value = round_to_count(last_smoothed + trend * step);
            let half_width = std_dev * (1.0 + step * config.confidence_growth);
            let center = value as f64;

            Some(ForecastPoint {
                date,
                value,
                is_historical: false,
                confidence: ConfidenceInterval {
                    lower: round_to_count(center - half_width),
                    upper: round_to_count(center + half_width),
                },
            })
        })
        .collect()
}
