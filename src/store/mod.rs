//! In-memory record store
//!
//! A stand-in for a database: records live in a vector for the lifetime of
//! the process. Records are validated when they enter the store, never when
//! they are read back.

pub mod sample;

use std::path::Path;

use chrono::{Days, NaiveDate};

use crate::algorithm::forecast::daily_admission_counts;
use crate::error::{CareMetricsError, Result};
use crate::filter::DashboardFilters;
use crate::models::{DailyCountPoint, PatientRecord};

pub use sample::sample_records;

/// Collection of patient records with lookup by identifier
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<PatientRecord>,
}

impl RecordStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the sample admissions
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self {
            records: sample_records(),
        }
    }

    /// Create a store from records, validating each one
    pub fn from_records(records: Vec<PatientRecord>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Load a JSON array of records from a file
    pub fn load_json(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let records: Vec<PatientRecord> = serde_json::from_str(&contents)?;
        log::info!("Read {} records from {}", records.len(), path.display());
        Self::from_records(records)
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order
    #[must_use]
    pub fn all(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Records matching the dashboard filters
    #[must_use]
    pub fn query(&self, filters: &DashboardFilters) -> Vec<&PatientRecord> {
        filters.apply(&self.records)
    }

    /// Look up a record by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PatientRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Validate and insert a record
    pub fn add(&mut self, record: PatientRecord) -> Result<&PatientRecord> {
        record.validate()?;
        if self.get(&record.id).is_some() {
            return Err(CareMetricsError::DuplicateRecord(record.id));
        }
        log::debug!("Adding record {}", record.id);
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Modify a record in place; the result is validated before it is kept
    ///
    /// The identifier cannot be changed through `update`.
    pub fn update<F>(&mut self, id: &str, modify: F) -> Result<&PatientRecord>
    where
        F: FnOnce(&mut PatientRecord),
    {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CareMetricsError::RecordNotFound(id.to_string()))?;

        let mut updated = self.records[index].clone();
        modify(&mut updated);
        updated.id = id.to_string();
        updated.validate()?;

        self.records[index] = updated;
        Ok(&self.records[index])
    }

    /// Remove a record, returning it
    pub fn remove(&mut self, id: &str) -> Result<PatientRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CareMetricsError::RecordNotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Restore the sample admissions, discarding everything else
    pub fn reset(&mut self) {
        self.records = sample_records();
    }

    /// Latest admission date among the stored records
    #[must_use]
    pub fn last_admission(&self) -> Option<NaiveDate> {
        self.records.iter().filter_map(PatientRecord::admission_day).max()
    }

    /// Complete daily admission series ending on `end`
    ///
    /// Covers `days` days before `end` plus `end` itself; missing days count 0.
    #[must_use]
    pub fn daily_admissions(&self, end: NaiveDate, days: u32) -> Vec<DailyCountPoint> {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        daily_admission_counts(&self.records, start, end)
    }
}
