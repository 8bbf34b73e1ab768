//! Operational efficiency: how long admissions last
//!
//! Handling time is the span between admission and discharge in fractional
//! days. Records whose span cannot be computed, or comes out negative, are
//! left out of every figure in this report.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PatientRecord;
use crate::utils::logging::log_skipped;
use crate::utils::round_to_one;

use super::statistics::{floor_median, floor_percentile, mean, sorted_floats};

/// Fraction used for the high percentile
pub const HIGH_PERCENTILE: f64 = 0.9;

/// Mean handling time of the admissions on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHandlingTime {
    /// Admission calendar date
    pub date: NaiveDate,
    /// Mean handling time in days
    pub avg_handling_time: f64,
    /// Admissions on that date with a usable handling time
    pub patient_count: usize,
}

/// Handling time statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalEfficiency {
    /// Mean handling time, one decimal
    pub average_handling_time: f64,
    /// Upper-middle handling time, one decimal
    pub median_handling_time: f64,
    /// 90th percentile handling time, one decimal
    pub percentile90: f64,
    /// Per admission date, ascending
    pub time_series: Vec<DailyHandlingTime>,
}

/// Build the operational efficiency report for a set of records
#[must_use]
pub fn analyze_operations<'a, I>(records: I) -> OperationalEfficiency
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let mut total = 0usize;
    let mut handling_times = Vec::new();
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for record in records {
        total += 1;
        let days = record.handling_time_days();
        if let Some(days) = days {
            handling_times.push(days);
        }

        // Every readable admission date gets a row, even with no usable stay
        if let Some(date) = record.admission_day() {
            let entry = by_date.entry(date).or_insert((0.0, 0));
            if let Some(days) = days {
                entry.0 += days;
                entry.1 += 1;
            }
        }
    }

    log_skipped(
        "Operational efficiency",
        total - handling_times.len(),
        "unreadable or negative handling time",
    );

    let sorted = sorted_floats(&handling_times);

    let time_series = by_date
        .into_iter()
        .map(|(date, (sum, count))| DailyHandlingTime {
            date,
            avg_handling_time: if count == 0 { 0.0 } else { sum / count as f64 },
            patient_count: count,
        })
        .collect();

    OperationalEfficiency {
        average_handling_time: round_to_one(mean(&sorted).unwrap_or(0.0)),
        median_handling_time: round_to_one(floor_median(&sorted).unwrap_or(0.0)),
        percentile90: round_to_one(floor_percentile(&sorted, HIGH_PERCENTILE).unwrap_or(0.0)),
        time_series,
    }
}
