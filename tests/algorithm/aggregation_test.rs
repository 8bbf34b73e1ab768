use care_metrics::algorithm::aggregation::{AgeRange, NO_PATHOLOGY, analyze_operations};
use care_metrics::{DashboardFilters, RecordStore, compute_dashboard_metrics};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use crate::utils::{located, record};

#[test]
fn test_empty_collection() {
    let metrics = compute_dashboard_metrics(&[], &DashboardFilters::none());
    let patients = &metrics.patient_analysis;

    assert_eq!(patients.total_patients, 0);
    assert_eq!(patients.most_frequent_pathology, NO_PATHOLOGY);
    assert_eq!(patients.median_age, 0);
    assert_eq!(patients.average_age, 0);
    assert!(patients.by_pathology.is_empty());

    let ranges: Vec<&str> = patients.by_age.iter().map(|b| b.range.as_str()).collect();
    assert_eq!(ranges, vec!["0-18", "19-35", "36-50", "51-65", "66+"]);
    assert!(patients.by_age.iter().all(|b| b.count == 0));

    let operations = &metrics.operational_efficiency;
    assert_eq!(operations.average_handling_time, 0.0);
    assert_eq!(operations.median_handling_time, 0.0);
    assert_eq!(operations.percentile90, 0.0);
    assert!(operations.time_series.is_empty());

    assert!(metrics.geographic_distribution.top_cities.is_empty());
}

#[test]
fn test_discharge_before_admission_still_counted() {
    let records = vec![
        record("bad", 60, "Cardiovascular", "2023-01-10", "2023-01-05"),
        record("ok", 30, "Respiratory", "2023-01-10", "2023-01-14"),
    ];
    let metrics = compute_dashboard_metrics(&records, &DashboardFilters::none());

    assert_eq!(metrics.patient_analysis.total_patients, 2);
    assert_eq!(metrics.patient_analysis.by_pathology["Cardiovascular"], 1);
    let middle_aged = metrics
        .patient_analysis
        .by_age
        .iter()
        .find(|b| b.range == AgeRange::MiddleAged.label())
        .unwrap();
    assert_eq!(middle_aged.count, 1);

    let operations = &metrics.operational_efficiency;
    assert_eq!(operations.average_handling_time, 4.0);
    assert_eq!(operations.median_handling_time, 4.0);
    assert_eq!(operations.percentile90, 4.0);
    assert_eq!(operations.time_series.len(), 1);
    assert_eq!(operations.time_series[0].patient_count, 1);
}

#[test]
fn test_sample_dashboard() {
    let store = RecordStore::with_sample_data();
    let metrics = compute_dashboard_metrics(store.all(), &DashboardFilters::none());
    let patients = &metrics.patient_analysis;

    assert_eq!(patients.total_patients, 8);
    assert_eq!(patients.most_frequent_pathology, "Cardiovascular");
    assert_eq!(patients.by_pathology["Cardiovascular"], 3);
    // Ages sorted: 28 34 41 45 55 58 62 70
    assert_eq!(patients.median_age, 55);
    assert_eq!(patients.average_age, 49);

    // Stays: 7 7 1 1 7 6 3 3
    let operations = &metrics.operational_efficiency;
    assert_eq!(operations.average_handling_time, 4.4);
    assert_eq!(operations.median_handling_time, 6.0);
    assert_eq!(operations.percentile90, 7.0);
    assert_eq!(operations.time_series.len(), 8);

    let geography = &metrics.geographic_distribution;
    assert_eq!(geography.by_region["Lombardia"], 2);
    let top: Vec<(&str, usize, u32)> = geography
        .top_cities
        .iter()
        .take(3)
        .map(|c| (c.name.as_str(), c.count, c.percentage))
        .collect();
    assert_eq!(top, vec![("Milano", 2, 25), ("Roma", 2, 25), ("Bologna", 1, 13)]);
}

#[test]
fn test_filtered_dashboard() {
    let store = RecordStore::with_sample_data();
    let filters = DashboardFilters::none()
        .with_date_range(
            NaiveDate::from_ymd_opt(2023, 10, 20).unwrap(),
            NaiveDate::from_ymd_opt(2023, 10, 31).unwrap(),
        )
        .with_pathology_groups(["Cardiovascular", "Respiratory", "Orthopedic"]);

    let metrics = compute_dashboard_metrics(store.all(), &filters);
    assert_eq!(metrics.patient_analysis.total_patients, 3);
    assert_eq!(metrics.patient_analysis.by_pathology.len(), 3);
}

#[test]
fn test_top_cities_capped() {
    let records: Vec<_> = (0..15)
        .map(|i| located(&format!("r{i}"), &format!("City {i:02}"), "Region"))
        .collect();
    let metrics = compute_dashboard_metrics(&records, &DashboardFilters::none());
    let geography = &metrics.geographic_distribution;

    assert_eq!(geography.by_city.len(), 15);
    assert_eq!(geography.top_cities.len(), 10);
    assert_eq!(geography.top_cities[0].name, "City 00");
    assert!(geography.top_cities.iter().all(|c| c.percentage == 7));
}

#[test]
fn test_unreadable_dates_skipped_in_operations() {
    let records = vec![
        record("a", 20, "X", "not a date", "2023-01-02"),
        record("b", 20, "X", "2023-01-01T08:00:00Z", "2023-01-01T20:00:00Z"),
    ];
    let operations = analyze_operations(&records);
    assert_eq!(operations.average_handling_time, 0.5);
    assert_eq!(operations.time_series.len(), 1);
    assert_eq!(operations.time_series[0].avg_handling_time, 0.5);
}

#[test]
fn test_dashboard_json_shape() {
    let store = RecordStore::with_sample_data();
    let metrics = compute_dashboard_metrics(store.all(), &DashboardFilters::none());
    let json = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json["patientAnalysis"]["totalPatients"], 8);
    assert_eq!(json["patientAnalysis"]["mostFrequentPathology"], "Cardiovascular");
    assert_eq!(json["patientAnalysis"]["byAge"][0]["range"], "0-18");
    assert_eq!(json["operationalEfficiency"]["percentile90"], 7.0);
    assert_eq!(
        json["operationalEfficiency"]["timeSeries"][0]["date"],
        "2023-10-15"
    );
    assert_eq!(json["geographicDistribution"]["topCities"][0]["name"], "Milano");
}
