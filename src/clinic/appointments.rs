//! Appointment manager. An appointment must point at an existing patient
//! and an existing doctor; it cannot be removed while procedures hang off it.

use crate::db::ClinicStore;
use crate::models::{Appointment, AppointmentDetails, AppointmentInput};

use super::messages::*;
use super::{ClinicError, ClinicResult};

pub struct AppointmentManager<'s, S: ClinicStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: ClinicStore + ?Sized> AppointmentManager<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// All appointments with patient, doctor and procedures resolved.
    pub fn list(&self) -> ClinicResult<Vec<AppointmentDetails>> {
        self.store
            .list_appointments()?
            .into_iter()
            .map(|a| self.resolve(a))
            .collect()
    }

    pub fn get(&self, id: i64) -> ClinicResult<AppointmentDetails> {
        let appointment = self
            .store
            .find_appointment(id)?
            .ok_or(ClinicError::NotFound(APPOINTMENT_NOT_FOUND))?;
        self.resolve(appointment)
    }

    pub fn create(&self, input: AppointmentInput) -> ClinicResult<AppointmentDetails> {
        self.check_references(&input)?;

        let appointment = self.store.insert_appointment(&input)?;
        tracing::info!(
            appointment_id = appointment.id,
            patient_id = ?appointment.patient_id,
            doctor_id = ?appointment.doctor_id,
            "Appointment created"
        );
        self.resolve(appointment)
    }

    /// Overwrites date, description and both references.
    pub fn update(&self, input: AppointmentInput) -> ClinicResult<AppointmentDetails> {
        let existing = self
            .store
            .find_appointment(input.id)?
            .ok_or(ClinicError::NotFound(APPOINTMENT_MISSING))?;

        self.check_references(&input)?;

        let updated = Appointment {
            id: existing.id,
            date: input.date,
            description: input.description,
            patient_id: input.patient_id,
            doctor_id: input.doctor_id,
        };
        self.store.update_appointment(&updated)?;

        tracing::info!(appointment_id = updated.id, "Appointment updated");
        self.resolve(updated)
    }

    pub fn delete(&self, id: i64) -> ClinicResult<AppointmentDetails> {
        let appointment = self
            .store
            .find_appointment(id)?
            .ok_or(ClinicError::NotFound(APPOINTMENT_MISSING))?;
        let details = self.resolve(appointment)?;

        if !details.procedures.is_empty() {
            return Err(ClinicError::Conflict(APPOINTMENT_HAS_PROCEDURES));
        }

        self.store.delete_appointment(id)?;
        tracing::info!(appointment_id = id, "Appointment deleted");
        Ok(details)
    }

    /// Patient first, then doctor. An absent id never resolves.
    fn check_references(&self, input: &AppointmentInput) -> ClinicResult<()> {
        let patient = match input.patient_id {
            Some(id) => self.store.find_patient(id)?,
            None => None,
        };
        if patient.is_none() {
            return Err(ClinicError::Validation(PATIENT_NOT_FOUND));
        }

        let doctor = match input.doctor_id {
            Some(id) => self.store.find_doctor(id)?,
            None => None,
        };
        if doctor.is_none() {
            return Err(ClinicError::Validation(DOCTOR_NOT_FOUND));
        }

        Ok(())
    }

    fn resolve(&self, appointment: Appointment) -> ClinicResult<AppointmentDetails> {
        let patient = match appointment.patient_id {
            Some(id) => self.store.find_patient(id)?,
            None => None,
        };
        let doctor = match appointment.doctor_id {
            Some(id) => self.store.find_doctor(id)?,
            None => None,
        };
        let procedures = self.store.procedures_for_appointment(appointment.id)?;

        Ok(AppointmentDetails {
            appointment,
            patient,
            doctor,
            procedures,
        })
    }
}
