use care_metrics::utils::success_envelope;
use care_metrics::{CareMetricsError, DashboardFilters, PatientRecord, RecordStore};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use crate::utils::record;

#[test]
fn test_load_json_file() {
    let path =
        std::env::temp_dir().join(format!("care-metrics-records-{}.json", std::process::id()));
    let records = vec![
        record("a", 30, "Respiratory", "2023-12-01", "2023-12-03"),
        record("b", 70, "Cardiovascular", "2023-12-02T09:30:00Z", "2023-12-05T10:00:00Z")
            .with_location("Pisa", "Toscana"),
    ];
    std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();
    let store = RecordStore::load_json(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("b").and_then(|r| r.city.as_deref()), Some("Pisa"));
    assert_eq!(store.last_admission(), NaiveDate::from_ymd_opt(2023, 12, 2));
}

#[test]
fn test_load_rejects_invalid_records() {
    let result = RecordStore::from_records(vec![
        record("a", 30, "Respiratory", "2023-12-01", "2023-12-03"),
        record("a", 31, "Respiratory", "2023-12-02", "2023-12-03"),
    ]);
    assert!(matches!(result, Err(CareMetricsError::DuplicateRecord(id)) if id == "a"));

    let result = RecordStore::from_records(vec![record("x", 30, "", "2023-12-01", "2023-12-03")]);
    assert!(matches!(result, Err(CareMetricsError::InvalidRecord { .. })));
}

#[test]
fn test_camel_case_input() {
    let json = r#"[{
        "id": "p1",
        "age": 44,
        "pathologyGroup": "Oncology",
        "admissionDate": "2024-02-01",
        "dischargeDate": "2024-02-09",
        "department": "Oncology"
    }]"#;
    let records: Vec<PatientRecord> = serde_json::from_str(json).unwrap();
    let store = RecordStore::from_records(records).unwrap();
    let record = store.get("p1").unwrap();
    assert_eq!(record.pathology_group, "Oncology");
    assert_eq!(record.city, None);
    assert_eq!(record.handling_time_days(), Some(8.0));
}

#[test]
fn test_history_for_forecast() {
    let mut store = RecordStore::new();
    store.add(record("a", 30, "X", "2024-01-01", "2024-01-02")).unwrap();
    store.add(record("b", 30, "X", "2024-01-03", "2024-01-04")).unwrap();
    store.add(record("c", 30, "X", "2024-01-03", "2024-01-05")).unwrap();

    let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let counts: Vec<u32> = store.daily_admissions(end, 3).iter().map(|p| p.count).collect();
    assert_eq!(counts, vec![0, 1, 0, 2]);
}

#[test]
fn test_filtered_listing_envelope() {
    let store = RecordStore::with_sample_data();
    let filters = DashboardFilters::none().with_pathology_groups(["Cardiovascular"]);
    let envelope = success_envelope(&store.query(&filters)).unwrap();

    assert_eq!(envelope["success"], true);
    let data = envelope["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["id"], "rec-001");
    assert_eq!(data[0]["pathologyGroup"], "Cardiovascular");
    assert_eq!(data[2]["admissionDate"], "2023-11-05");
    assert_eq!(data[2]["city"], "Roma");
}
