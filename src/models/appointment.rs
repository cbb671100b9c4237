use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::doctor::Doctor;
use super::patient::Patient;
use super::procedure::Procedure;

/// Appointment row. Patient and doctor are referenced by id only;
/// `AppointmentDetails` carries the resolved records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    #[serde(rename = "fecha")]
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "pacienteId")]
    pub patient_id: Option<i64>,
    #[serde(rename = "doctorId")]
    pub doctor_id: Option<i64>,
}

/// Create/update payload. `id` is ignored on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentInput {
    #[serde(default)]
    pub id: i64,
    #[serde(
        rename = "fecha",
        default,
        deserialize_with = "super::datetime::deserialize_client_datetime"
    )]
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "pacienteId", default)]
    pub patient_id: Option<i64>,
    #[serde(rename = "doctorId", default)]
    pub doctor_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentDetails {
    #[serde(flatten)]
    pub appointment: Appointment,
    #[serde(rename = "paciente")]
    pub patient: Option<Patient>,
    pub doctor: Option<Doctor>,
    #[serde(rename = "procedimientos")]
    pub procedures: Vec<Procedure>,
}
