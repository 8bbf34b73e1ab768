//! Patient record model
//!
//! A flat admission record as produced by intake. Timestamps are kept as the
//! strings intake received; the engines parse them and skip what they cannot
//! read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CareMetricsError, Result};
use crate::utils::date_utils::{calendar_date, days_between, parse_timestamp};

/// A single hospital admission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Unique record identifier
    pub id: String,
    /// Age in whole years
    pub age: u32,
    /// Coarse diagnostic category, e.g. "Cardiovascular"
    pub pathology_group: String,
    /// Admission timestamp as received
    pub admission_date: String,
    /// Discharge timestamp as received
    pub discharge_date: String,
    /// Treating department
    #[serde(default)]
    pub department: String,
    /// City of residence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Region of residence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl PatientRecord {
    /// Create a record with the required fields; location is left empty
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        age: u32,
        pathology_group: impl Into<String>,
        admission_date: impl Into<String>,
        discharge_date: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            age,
            pathology_group: pathology_group.into(),
            admission_date: admission_date.into(),
            discharge_date: discharge_date.into(),
            department: department.into(),
            city: None,
            region: None,
        }
    }

    /// Set the city and region
    #[must_use]
    pub fn with_location(mut self, city: impl Into<String>, region: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.region = Some(region.into());
        self
    }

    /// Calendar date of admission, if the timestamp parses
    #[must_use]
    pub fn admission_day(&self) -> Option<NaiveDate> {
        calendar_date(&self.admission_date)
    }

    /// Handling time in fractional days
    ///
    /// `None` if either timestamp is unreadable, or if the result is negative
    /// or not finite.
    #[must_use]
    pub fn handling_time_days(&self) -> Option<f64> {
        days_between(&self.admission_date, &self.discharge_date)
            .filter(|days| days.is_finite() && *days >= 0.0)
    }

    /// City label, if present and not blank
    #[must_use]
    pub fn city_label(&self) -> Option<&str> {
        non_blank(self.city.as_deref())
    }

    /// Region label, if present and not blank
    #[must_use]
    pub fn region_label(&self) -> Option<&str> {
        non_blank(self.region.as_deref())
    }

    /// Strict intake validation
    ///
    /// The engines accept anything; this is for the boundary where records
    /// enter the system.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CareMetricsError::invalid_record("", "missing identifier"));
        }
        if self.pathology_group.trim().is_empty() {
            return Err(CareMetricsError::invalid_record(
                &self.id,
                "missing pathology group",
            ));
        }

        let admission = parse_timestamp(&self.admission_date).ok_or_else(|| {
            CareMetricsError::invalid_record(
                &self.id,
                format!("unreadable admission date '{}'", self.admission_date),
            )
        })?;
        let discharge = parse_timestamp(&self.discharge_date).ok_or_else(|| {
            CareMetricsError::invalid_record(
                &self.id,
                format!("unreadable discharge date '{}'", self.discharge_date),
            )
        })?;

        if discharge < admission {
            return Err(CareMetricsError::invalid_record(
                &self.id,
                "discharge precedes admission",
            ));
        }

        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
