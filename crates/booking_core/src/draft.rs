use shared::{
    domain::{Appointment, Gender, NewAppointment, VisitType},
    error::ValidationError,
};

use crate::validation::{is_valid_phone, is_valid_visit_time};

/// Form contents before submission. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub dr_name: String,
    pub visit_date: String,
    pub visit_time: String,
    pub visit_type: Option<VisitType>,
    pub gender: Option<Gender>,
}

/// A single field change coming from the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Name(String),
    Age(String),
    Phone(String),
    DrName(String),
    VisitDate(String),
    VisitTime(String),
    VisitType(Option<VisitType>),
    Gender(Option<Gender>),
}

impl From<&Appointment> for AppointmentDraft {
    fn from(value: &Appointment) -> Self {
        Self {
            name: value.name.clone(),
            age: value.age.clone(),
            phone: value.phone.clone(),
            dr_name: value.dr_name.clone(),
            visit_date: value.visit_date.clone(),
            visit_time: value.visit_time.clone(),
            visit_type: Some(value.visit_type),
            gender: Some(value.gender),
        }
    }
}

impl AppointmentDraft {
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Name(value) => self.name = value,
            DraftEdit::Age(value) => self.age = value,
            DraftEdit::Phone(value) => self.phone = value,
            DraftEdit::DrName(value) => self.dr_name = value,
            DraftEdit::VisitDate(value) => self.visit_date = value,
            DraftEdit::VisitTime(value) => self.visit_time = value,
            DraftEdit::VisitType(value) => self.visit_type = value,
            DraftEdit::Gender(value) => self.gender = value,
        }
    }

    pub fn is_empty_template(&self) -> bool {
        *self == Self::default()
    }

    fn has_empty_fields(&self) -> bool {
        [
            &self.name,
            &self.age,
            &self.phone,
            &self.dr_name,
            &self.visit_date,
            &self.visit_time,
        ]
        .iter()
        .any(|value| value.is_empty())
            || self.visit_type.is_none()
            || self.gender.is_none()
    }

    /// Runs completeness, phone and time checks in that order and stops at the
    /// first failure. Field values are carried over verbatim.
    pub fn validate(&self) -> Result<NewAppointment, ValidationError> {
        if self.has_empty_fields() {
            return Err(ValidationError::EmptyFields);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if !is_valid_visit_time(&self.visit_time) {
            return Err(ValidationError::InvalidTime);
        }

        let (Some(visit_type), Some(gender)) = (self.visit_type, self.gender) else {
            return Err(ValidationError::EmptyFields);
        };

        Ok(NewAppointment {
            name: self.name.clone(),
            age: self.age.clone(),
            phone: self.phone.clone(),
            dr_name: self.dr_name.clone(),
            visit_date: self.visit_date.clone(),
            visit_time: self.visit_time.clone(),
            visit_type,
            gender,
        })
    }
}
