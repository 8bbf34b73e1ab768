//! Templated resource guidance for a forecast

use serde::{Deserialize, Serialize};

use super::metrics::{ForecastMetrics, PeakDay, TrendDirection};

/// Staffing, bed and equipment guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Staffing guidance
    pub staffing: String,
    /// Bed allocation guidance
    pub beds: String,
    /// Equipment and consumables guidance
    pub equipment: String,
}

/// Render the guidance for a set of forecast metrics
#[must_use]
pub fn generate_recommendations(metrics: &ForecastMetrics) -> Recommendations {
    recommend(metrics.trend, metrics.average_daily, &metrics.peak_day)
}

/// Render the guidance for a trend, daily average and peak day
#[must_use]
pub fn recommend(trend: TrendDirection, average_daily: f64, peak: &PeakDay) -> Recommendations {
    let per_day = average_daily.round();
    let peak_date = peak
        .date
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default();

    match trend {
        TrendDirection::Increasing => Recommendations {
            staffing: format!(
                "Increase staffing by 15-20% to handle expected {per_day} patients/day. Peak on {peak_date} with {} patients.",
                peak.value
            ),
            beds: format!(
                "Prepare {} additional beds. Ensure {} beds available for peak day.",
                (average_daily * 0.8).ceil(),
                (peak.value as f64 * 0.9).ceil()
            ),
            equipment: "Stock up on consumables. Schedule equipment maintenance before peak period."
                .to_string(),
        },
        TrendDirection::Decreasing => Recommendations {
            staffing: format!(
                "Maintain current staffing levels. Expected {per_day} patients/day represents a decrease."
            ),
            beds: "Current bed capacity is sufficient. Consider scheduling elective procedures."
                .to_string(),
            equipment: "Good time for equipment maintenance and inventory optimization."
                .to_string(),
        },
        TrendDirection::Stable => Recommendations {
            staffing: format!(
                "Maintain current staffing for stable workload of ~{per_day} patients/day."
            ),
            beds: format!(
                "Current bed allocation adequate. Monitor for {} patients on {peak_date}.",
                peak.value
            ),
            equipment: "Continue standard inventory management practices.".to_string(),
        },
    }
}
