//! Record filtering
//!
//! Dashboard filters arrive as a flat, serializable structure. They are turned
//! into a tree of criteria that is evaluated per record before the records are
//! handed to the aggregation engine.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PatientRecord;

/// Defines a criterion for filtering records
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// Inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date included
    pub start: NaiveDate,
    /// Last date included
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` lies in the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Filters selectable on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardFilters {
    /// Admission date range
    pub date_range: Option<DateRange>,
    /// Department, exact match
    pub department: Option<String>,
    /// Accepted pathology groups; empty means all
    pub pathology_groups: Vec<String>,
}

impl DashboardFilters {
    /// Filters that accept every record
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Restrict to an admission date range
    #[must_use]
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some(DateRange::new(start, end));
        self
    }

    /// Restrict to a department
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Restrict to a set of pathology groups
    #[must_use]
    pub fn with_pathology_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pathology_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Build the equivalent criteria tree
    #[must_use]
    pub fn to_filter(&self) -> RecordFilter {
        let mut parts = Vec::new();

        if let Some(range) = self.date_range {
            parts.push(RecordFilter::AdmittedBetween(range));
        }
        if let Some(department) = &self.department {
            parts.push(RecordFilter::Department(department.clone()));
        }
        if !self.pathology_groups.is_empty() {
            parts.push(RecordFilter::PathologyGroups(
                self.pathology_groups.iter().cloned().collect(),
            ));
        }

        RecordFilter::All(parts)
    }

    /// Apply the filters, keeping record order
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [PatientRecord]) -> Vec<&'a PatientRecord> {
        let filter = self.to_filter();
        let selected: Vec<_> = records
            .iter()
            .filter(|record| filter.meets_criteria(record))
            .collect();
        log::debug!(
            "Dashboard filters kept {} of {} records",
            selected.len(),
            records.len()
        );
        selected
    }
}

/// A filter that can be applied to a patient record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Admission calendar date within the range; unreadable dates never match
    AdmittedBetween(DateRange),
    /// Department equality
    Department(String),
    /// Pathology group membership
    PathologyGroups(HashSet<String>),
    /// Combined filter that requires all criteria to be met
    All(Vec<RecordFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<RecordFilter>),
}

impl FilterCriteria<PatientRecord> for RecordFilter {
    fn meets_criteria(&self, record: &PatientRecord) -> bool {
        match self {
            Self::AdmittedBetween(range) => record
                .admission_day()
                .is_some_and(|date| range.contains(date)),
            Self::Department(department) => record.department == *department,
            Self::PathologyGroups(groups) => groups.contains(&record.pathology_group),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(record)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(record)),
        }
    }
}
