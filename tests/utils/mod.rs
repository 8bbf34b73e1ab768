use care_metrics::{DailyCountPoint, PatientRecord};
use chrono::{Days, NaiveDate};

/// First day of every generated series
#[must_use]
pub fn series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, 1).unwrap()
}

/// Daily series starting at [`series_start`] with the given counts
#[must_use]
pub fn series(counts: &[u32]) -> Vec<DailyCountPoint> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| DailyCountPoint::new(series_start() + Days::new(i as u64), count))
        .collect()
}

/// Record admitted on `admission` and discharged on `discharge`
#[must_use]
pub fn record(id: &str, age: u32, group: &str, admission: &str, discharge: &str) -> PatientRecord {
    PatientRecord::new(id, age, group, admission, discharge, "General Medicine")
}

/// Record with a city and region attached
#[must_use]
pub fn located(id: &str, city: &str, region: &str) -> PatientRecord {
    record(id, 40, "Respiratory", "2023-10-01", "2023-10-03").with_location(city, region)
}
