use std::{collections::HashSet, fs, path::Path};

use shared::domain::{Appointment, AppointmentId, Gender, VisitType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read appointments file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed appointments JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("appointment id {0} is not a positive integer")]
    NonPositiveId(AppointmentId),
    #[error("appointment id {0} leaves no room for the next booking id")]
    IdOutOfRange(AppointmentId),
    #[error("appointment id {0} appears more than once")]
    DuplicateId(AppointmentId),
    #[error("appointment {0} has empty fields")]
    IncompleteRecord(AppointmentId),
}

fn seed_record(id: i64, name: &str, visit_type: VisitType) -> Appointment {
    Appointment {
        id: AppointmentId(id),
        name: name.to_string(),
        age: "28".to_string(),
        phone: "+91 9876543215".to_string(),
        dr_name: "Dr. Ananth".to_string(),
        visit_date: "2021-02-02".to_string(),
        visit_time: "06:00 PM".to_string(),
        visit_type,
        gender: Gender::Male,
    }
}

/// The two example bookings every fresh store starts with.
pub fn seed_appointments() -> Vec<Appointment> {
    vec![
        seed_record(1, "John Doe", VisitType::Consult),
        seed_record(2, "Mukul Rao", VisitType::Revisit),
    ]
}

/// Parses a JSON array of appointments for bulk replacement of the store.
///
/// Ids must be positive, unique and below `i64::MAX` so the store can always
/// assign the next id. Every text field must be non-empty.
pub fn parse_appointments(json: &str) -> Result<Vec<Appointment>, SeedError> {
    let appointments: Vec<Appointment> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for appointment in &appointments {
        if appointment.id.0 <= 0 {
            return Err(SeedError::NonPositiveId(appointment.id));
        }
        if appointment.id.0.checked_add(1).is_none() {
            return Err(SeedError::IdOutOfRange(appointment.id));
        }
        if !seen.insert(appointment.id) {
            return Err(SeedError::DuplicateId(appointment.id));
        }
        let text_fields = [
            &appointment.name,
            &appointment.age,
            &appointment.phone,
            &appointment.dr_name,
            &appointment.visit_date,
            &appointment.visit_time,
        ];
        if text_fields.iter().any(|value| value.is_empty()) {
            return Err(SeedError::IncompleteRecord(appointment.id));
        }
    }

    Ok(appointments)
}

pub fn load_appointments_file(path: &Path) -> Result<Vec<Appointment>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_appointments(&raw)
}

#[cfg(test)]
#[path = "tests/seed_tests.rs"]
mod tests;
