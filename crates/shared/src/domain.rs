use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_newtype!(AppointmentId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitType {
    Consult,
    Revisit,
}

impl VisitType {
    pub const ALL: [VisitType; 2] = [VisitType::Consult, VisitType::Revisit];

    pub fn label(self) -> &'static str {
        match self {
            VisitType::Consult => "Consult",
            VisitType::Revisit => "Revisit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "gender",
                value: value.to_string(),
            })
    }
}

impl FromStr for VisitType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        VisitType::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "visit type",
                value: value.to_string(),
            })
    }
}

/// A booking that has passed validation but has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub dr_name: String,
    pub visit_date: String,
    pub visit_time: String,
    pub visit_type: VisitType,
    pub gender: Gender,
}

impl NewAppointment {
    pub fn with_id(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            name: self.name,
            age: self.age,
            phone: self.phone,
            dr_name: self.dr_name,
            visit_date: self.visit_date,
            visit_time: self.visit_time,
            visit_type: self.visit_type,
            gender: self.gender,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub name: String,
    pub age: String,
    pub phone: String,
    pub dr_name: String,
    pub visit_date: String,
    pub visit_time: String,
    pub visit_type: VisitType,
    pub gender: Gender,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys_and_bare_id() {
        let appointment = NewAppointment {
            name: "John Doe".to_string(),
            age: "28".to_string(),
            phone: "+91 9876543215".to_string(),
            dr_name: "Dr. Ananth".to_string(),
            visit_date: "2021-02-02".to_string(),
            visit_time: "06:00 PM".to_string(),
            visit_type: VisitType::Consult,
            gender: Gender::Male,
        }
        .with_id(AppointmentId(7));

        let value = serde_json::to_value(&appointment).expect("serialize");
        assert_eq!(value["id"], 7);
        assert_eq!(value["drName"], "Dr. Ananth");
        assert_eq!(value["visitTime"], "06:00 PM");
        assert_eq!(value["visitType"], "Consult");
        assert_eq!(value["gender"], "Male");
    }

    #[test]
    fn parses_select_values_case_insensitively() {
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" Revisit ".parse::<VisitType>(), Ok(VisitType::Revisit));
        let err = "Walk-in".parse::<VisitType>().expect_err("unknown visit type");
        assert_eq!(err.to_string(), "unknown visit type: 'Walk-in'");
    }

    #[test]
    fn appointment_id_display_honors_width() {
        assert_eq!(format!("{:>4}|", AppointmentId(7)), "   7|");
        assert_eq!(AppointmentId(12).to_string(), "12");
    }
}
