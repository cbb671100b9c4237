//! Clinic managers: validation and persistence for patients, doctors,
//! appointments and procedures.
//!
//! Every manager borrows a `ClinicStore` and re-reads the store on each
//! call. All checks run before the first write, so a rejected request
//! leaves the store untouched.

pub mod appointments;
pub mod doctors;
pub mod messages;
pub mod patients;
pub mod procedures;

pub use appointments::AppointmentManager;
pub use doctors::DoctorManager;
pub use patients::PatientManager;
pub use procedures::ProcedureManager;

use chrono::{Local, NaiveDateTime};
use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Debug, Error)]
pub enum ClinicError {
    /// The addressed entity does not exist.
    #[error("{0}")]
    NotFound(&'static str),
    /// The payload breaks a field rule or references a missing entity.
    #[error("{0}")]
    Validation(&'static str),
    /// Duplicate identity, or delete blocked by dependents.
    #[error("{0}")]
    Conflict(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl ClinicError {
    /// The client-facing message, if this is a rule violation.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ClinicError::NotFound(m) | ClinicError::Validation(m) | ClinicError::Conflict(m) => {
                Some(*m)
            }
            ClinicError::Database(_) => None,
        }
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;

/// Wall-clock "now" used for date checks, in local time.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
