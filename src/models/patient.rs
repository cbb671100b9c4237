use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::appointment::Appointment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "apellido")]
    pub surname: Option<String>,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: Option<NaiveDateTime>,
}

/// Create/update payload. `id` is ignored on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientInput {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "apellido", default)]
    pub surname: Option<String>,
    #[serde(
        rename = "fechaNacimiento",
        default,
        deserialize_with = "super::datetime::deserialize_client_datetime"
    )]
    pub birth_date: Option<NaiveDateTime>,
}

/// A patient together with the appointments that reference it.
#[derive(Debug, Clone, Serialize)]
pub struct PatientDetails {
    #[serde(flatten)]
    pub patient: Patient,
    #[serde(rename = "citas")]
    pub appointments: Vec<Appointment>,
}
