//! Building a complete daily admission series from records
//!
//! The forecast engine expects one point per day with no gaps. This is the
//! caller-side helper that produces such a series.

use std::collections::HashMap;

use chrono::NaiveDate;
use itertools::Itertools;

use crate::models::{DailyCountPoint, PatientRecord};
use crate::utils::logging::log_skipped;

/// Admissions per day over `[start, end]`, one point per day, zero-filled
///
/// Records whose admission timestamp cannot be read are skipped. An inverted
/// range gives an empty series.
#[must_use]
pub fn daily_admission_counts<'a, I>(
    records: I,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyCountPoint>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let mut unreadable = 0usize;
    let counts: HashMap<NaiveDate, usize> = records
        .into_iter()
        .filter_map(|record| {
            let day = record.admission_day();
            if day.is_none() {
                unreadable += 1;
            }
            day
        })
        .filter(|day| (start..=end).contains(day))
        .counts();

    log_skipped("Admission series", unreadable, "unreadable admission date");

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| {
            let count = counts.get(&day).copied().unwrap_or(0);
            DailyCountPoint::new(day, u32::try_from(count).unwrap_or(u32::MAX))
        })
        .collect()
}
