//! Patient demographic and pathology analysis

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::PatientRecord;

use super::statistics::{count_by, floor_median, most_frequent};

/// Label reported when there is no record to pick a pathology from
pub const NO_PATHOLOGY: &str = "N/A";

/// Fixed age partition used on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeRange {
    /// 0 to 18
    Child,
    /// 19 to 35
    YoungAdult,
    /// 36 to 50
    Adult,
    /// 51 to 65
    MiddleAged,
    /// 66 and over
    Senior,
}

impl AgeRange {
    /// All ranges in ascending order
    pub const ALL: [Self; 5] = [
        Self::Child,
        Self::YoungAdult,
        Self::Adult,
        Self::MiddleAged,
        Self::Senior,
    ];

    /// The range an age falls into
    #[must_use]
    pub const fn of(age: u32) -> Self {
        match age {
            0..=18 => Self::Child,
            19..=35 => Self::YoungAdult,
            36..=50 => Self::Adult,
            51..=65 => Self::MiddleAged,
            _ => Self::Senior,
        }
    }

    /// Inclusive bounds; the last range is open-ended
    #[must_use]
    pub const fn bounds(self) -> (u32, Option<u32>) {
        match self {
            Self::Child => (0, Some(18)),
            Self::YoungAdult => (19, Some(35)),
            Self::Adult => (36, Some(50)),
            Self::MiddleAged => (51, Some(65)),
            Self::Senior => (66, None),
        }
    }

    /// Dashboard label, e.g. "19-35" or "66+"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Child => "0-18",
            Self::YoungAdult => "19-35",
            Self::Adult => "36-50",
            Self::MiddleAged => "51-65",
            Self::Senior => "66+",
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Count of records in one age range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBucket {
    /// Range label
    pub range: String,
    /// Records in the range
    pub count: usize,
}

/// Demographic and pathology summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAnalysis {
    /// Number of records analysed
    pub total_patients: usize,
    /// Records per pathology group
    pub by_pathology: BTreeMap<String, usize>,
    /// Records per age range, all five ranges in order
    pub by_age: Vec<AgeBucket>,
    /// Pathology group with the most records, or "N/A"
    pub most_frequent_pathology: String,
    /// Upper-middle age
    pub median_age: u32,
    /// Mean age rounded to the nearest year
    pub average_age: u32,
}

/// Build the patient analysis for a set of records
#[must_use]
pub fn analyze_patients<'a, I>(records: I) -> PatientAnalysis
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let records: Vec<&PatientRecord> = records.into_iter().collect();
    let total_patients = records.len();

    let by_pathology = count_by(records.iter().copied(), |r: &'a PatientRecord| {
        Some(r.pathology_group.as_str())
    });

    let mut age_counts = [0usize; AgeRange::ALL.len()];
    for record in &records {
        age_counts[AgeRange::of(record.age) as usize] += 1;
    }
    let by_age = AgeRange::ALL
        .iter()
        .zip(age_counts)
        .map(|(range, count)| AgeBucket {
            range: range.label().to_string(),
            count,
        })
        .collect();

    let most_frequent_pathology = most_frequent(records.iter().map(|r| r.pathology_group.as_str()))
        .unwrap_or(NO_PATHOLOGY)
        .to_string();

    let mut ages: Vec<u32> = records.iter().map(|r| r.age).collect();
    ages.sort_unstable();
    let median_age = floor_median(&ages).unwrap_or(0);
    let average_age = if ages.is_empty() {
        0
    } else {
        let sum: u64 = ages.iter().map(|&a| u64::from(a)).sum();
        (sum as f64 / ages.len() as f64).round() as u32
    };

    log::debug!(
        "Patient analysis: {total_patients} records, {} pathology groups",
        by_pathology.len()
    );

    PatientAnalysis {
        total_patients,
        by_pathology,
        by_age,
        most_frequent_pathology,
        median_age,
        average_age,
    }
}
