//! Doctor manager. A doctor is identified by its (name, specialty) pair.

use crate::db::ClinicStore;
use crate::models::{Doctor, DoctorDetails, DoctorInput};

use super::messages::*;
use super::{ClinicError, ClinicResult};

pub struct DoctorManager<'s, S: ClinicStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: ClinicStore + ?Sized> DoctorManager<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> ClinicResult<Vec<DoctorDetails>> {
        self.store
            .list_doctors()?
            .into_iter()
            .map(|d| self.with_appointments(d))
            .collect()
    }

    pub fn get(&self, id: i64) -> ClinicResult<DoctorDetails> {
        let doctor = self
            .store
            .find_doctor(id)?
            .ok_or(ClinicError::NotFound(DOCTOR_NOT_FOUND))?;
        self.with_appointments(doctor)
    }

    pub fn create(&self, input: DoctorInput) -> ClinicResult<DoctorDetails> {
        if self.identity_taken(&input, None)? {
            return Err(ClinicError::Conflict(DOCTOR_DUPLICATE));
        }

        let doctor = self.store.insert_doctor(&input)?;
        tracing::info!(doctor_id = doctor.id, "Doctor created");
        self.with_appointments(doctor)
    }

    /// Overwrites name and specialty. The new pair must not belong to
    /// another doctor.
    pub fn update(&self, input: DoctorInput) -> ClinicResult<DoctorDetails> {
        let mut existing = self
            .store
            .find_doctor(input.id)?
            .ok_or(ClinicError::NotFound(DOCTOR_MISSING))?;

        if self.identity_taken(&input, Some(existing.id))? {
            return Err(ClinicError::Conflict(DOCTOR_DUPLICATE));
        }

        existing.name = input.name;
        existing.specialty = input.specialty;
        self.store.update_doctor(&existing)?;

        tracing::info!(doctor_id = existing.id, "Doctor updated");
        self.with_appointments(existing)
    }

    pub fn delete(&self, id: i64) -> ClinicResult<DoctorDetails> {
        let doctor = self
            .store
            .find_doctor(id)?
            .ok_or(ClinicError::NotFound(DOCTOR_MISSING))?;
        let details = self.with_appointments(doctor)?;

        if !details.appointments.is_empty() {
            return Err(ClinicError::Conflict(DOCTOR_HAS_APPOINTMENTS));
        }

        self.store.delete_doctor(id)?;
        tracing::info!(doctor_id = id, "Doctor deleted");
        Ok(details)
    }

    fn identity_taken(&self, input: &DoctorInput, except: Option<i64>) -> ClinicResult<bool> {
        let found = self
            .store
            .find_doctor_by_identity(input.name.as_deref(), input.specialty.as_deref())?;
        Ok(found.is_some_and(|d| Some(d.id) != except))
    }

    fn with_appointments(&self, doctor: Doctor) -> ClinicResult<DoctorDetails> {
        let appointments = self.store.appointments_for_doctor(doctor.id)?;
        Ok(DoctorDetails { doctor, appointments })
    }
}
