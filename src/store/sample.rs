//! Sample admissions used to seed a fresh store

use crate::models::PatientRecord;

/// The eight demo admissions, autumn 2023
#[must_use]
pub fn sample_records() -> Vec<PatientRecord> {
    vec![
        PatientRecord::new(
            "rec-001",
            45,
            "Cardiovascular",
            "2023-10-15",
            "2023-10-22",
            "Cardiology",
        )
        .with_location("Milano", "Lombardia"),
        PatientRecord::new("rec-002", 62, "Endocrine", "2023-10-18", "2023-10-25", "Endocrinology")
            .with_location("Roma", "Lazio"),
        PatientRecord::new("rec-003", 28, "Orthopedic", "2023-10-20", "2023-10-21", "Orthopedics")
            .with_location("Torino", "Piemonte"),
        PatientRecord::new("rec-004", 55, "Neurological", "2023-10-22", "2023-10-23", "Neurology")
            .with_location("Napoli", "Campania"),
        PatientRecord::new(
            "rec-005",
            70,
            "Cardiovascular",
            "2023-10-25",
            "2023-11-01",
            "Cardiology",
        )
        .with_location("Milano", "Lombardia"),
        PatientRecord::new("rec-006", 34, "Respiratory", "2023-10-28", "2023-11-03", "Pulmonology")
            .with_location("Firenze", "Toscana"),
        PatientRecord::new("rec-007", 41, "Gastrointestinal", "2023-11-01", "2023-11-04", "Surgery")
            .with_location("Bologna", "Emilia-Romagna"),
        PatientRecord::new(
            "rec-008",
            58,
            "Cardiovascular",
            "2023-11-05",
            "2023-11-08",
            "Cardiology",
        )
        .with_location("Roma", "Lazio"),
    ]
}
