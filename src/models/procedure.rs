use serde::{Deserialize, Serialize};

use super::appointment::Appointment;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    pub id: i64,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "costo")]
    pub cost: Option<Money>,
    #[serde(rename = "citaId")]
    pub appointment_id: Option<i64>,
}

/// Create/update payload. `id` is ignored on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcedureInput {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "costo", default)]
    pub cost: Option<Money>,
    #[serde(rename = "citaId", default)]
    pub appointment_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcedureDetails {
    #[serde(flatten)]
    pub procedure: Procedure,
    #[serde(rename = "cita")]
    pub appointment: Option<Appointment>,
}
