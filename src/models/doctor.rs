use serde::{Deserialize, Serialize};

use super::appointment::Appointment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "especialidad")]
    pub specialty: Option<String>,
}

/// Create/update payload. `id` is ignored on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorInput {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "especialidad", default)]
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorDetails {
    #[serde(flatten)]
    pub doctor: Doctor,
    #[serde(rename = "citas")]
    pub appointments: Vec<Appointment>,
}
