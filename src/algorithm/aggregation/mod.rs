//! Dashboard aggregation engine
//!
//! This module turns a collection of patient records into the three
//! independent dashboard reports: patient analysis, operational efficiency
//! and geographic distribution. Every function here is total; empty input
//! gives zeroed reports and malformed records are skipped where they matter.

pub mod geographic;
pub mod operational;
pub mod patient;
pub mod statistics;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::filter::DashboardFilters;
use crate::models::PatientRecord;
use crate::utils::logging::{log_operation_complete, log_operation_start};

pub use geographic::{CityShare, GeographicDistribution, TOP_CITIES_LIMIT, analyze_geography};
pub use operational::{DailyHandlingTime, OperationalEfficiency, analyze_operations};
pub use patient::{AgeBucket, AgeRange, NO_PATHOLOGY, PatientAnalysis, analyze_patients};

/// All dashboard reports for one selection of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Demographics and pathology
    pub patient_analysis: PatientAnalysis,
    /// Handling time statistics
    pub operational_efficiency: OperationalEfficiency,
    /// City and region breakdown
    pub geographic_distribution: GeographicDistribution,
}

/// Filter the records, then build every dashboard report over the selection
#[must_use]
pub fn compute_dashboard_metrics(
    records: &[PatientRecord],
    filters: &DashboardFilters,
) -> DashboardMetrics {
    let start = Instant::now();
    let selected = filters.apply(records);
    log_operation_start("Computing dashboard metrics", selected.len());

    let metrics = aggregate(selected.iter().copied());

    log_operation_complete("aggregated", selected.len(), Some(start.elapsed()));
    metrics
}

/// Build every dashboard report over an already selected set of records
#[must_use]
pub fn aggregate<'a, I>(records: I) -> DashboardMetrics
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    let records: Vec<&PatientRecord> = records.into_iter().collect();

    DashboardMetrics {
        patient_analysis: analyze_patients(records.iter().copied()),
        operational_efficiency: analyze_operations(records.iter().copied()),
        geographic_distribution: analyze_geography(records.iter().copied()),
    }
}

impl DashboardMetrics {
    /// Human-readable multi-line summary
    #[must_use]
    pub fn summary(&self) -> String {
        let patients = &self.patient_analysis;
        let ops = &self.operational_efficiency;
        let geo = &self.geographic_distribution;

        let mut summary = String::new();
        summary.push_str("Dashboard Summary:\n");
        summary.push_str(&format!("  Total Patients: {}\n", patients.total_patients));
        summary.push_str(&format!(
            "  Most Frequent Pathology: {}\n",
            patients.most_frequent_pathology
        ));
        summary.push_str(&format!("  Median Age: {}\n", patients.median_age));
        summary.push_str(&format!("  Average Age: {}\n", patients.average_age));

        summary.push_str("\nPatients by Pathology:\n");
        for (group, count) in &patients.by_pathology {
            summary.push_str(&format!("    {group}: {count}\n"));
        }

        summary.push_str("\nPatients by Age:\n");
        for bucket in &patients.by_age {
            summary.push_str(&format!("    {}: {}\n", bucket.range, bucket.count));
        }

        summary.push_str("\nOperational Efficiency:\n");
        summary.push_str(&format!(
            "  Average Handling Time: {:.1} days\n",
            ops.average_handling_time
        ));
        summary.push_str(&format!(
            "  Median Handling Time: {:.1} days\n",
            ops.median_handling_time
        ));
        summary.push_str(&format!("  90th Percentile: {:.1} days\n", ops.percentile90));

        if !geo.top_cities.is_empty() {
            summary.push_str("\nTop Cities:\n");
            for city in &geo.top_cities {
                summary.push_str(&format!(
                    "    {}: {} ({}%)\n",
                    city.name, city.count, city.percentage
                ));
            }
        }

        summary
    }
}
