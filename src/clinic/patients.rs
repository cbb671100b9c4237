//! Patient manager.

use crate::db::ClinicStore;
use crate::models::{Patient, PatientDetails, PatientInput};

use super::messages::*;
use super::{now, ClinicError, ClinicResult};

pub struct PatientManager<'s, S: ClinicStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: ClinicStore + ?Sized> PatientManager<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// All patients, each with its appointments.
    pub fn list(&self) -> ClinicResult<Vec<PatientDetails>> {
        self.store
            .list_patients()?
            .into_iter()
            .map(|p| self.with_appointments(p))
            .collect()
    }

    pub fn get(&self, id: i64) -> ClinicResult<PatientDetails> {
        let patient = self
            .store
            .find_patient(id)?
            .ok_or(ClinicError::NotFound(PATIENT_NOT_FOUND))?;
        self.with_appointments(patient)
    }

    pub fn create(&self, input: PatientInput) -> ClinicResult<PatientDetails> {
        if input.birth_date.is_some_and(|d| d > now()) {
            return Err(ClinicError::Validation(BIRTH_DATE_AFTER_TODAY));
        }

        let patient = self.store.insert_patient(&input)?;
        tracing::info!(patient_id = patient.id, "Patient created");
        self.with_appointments(patient)
    }

    /// Copies name, surname and birth date onto the stored record.
    pub fn update(&self, input: PatientInput) -> ClinicResult<PatientDetails> {
        let mut existing = self
            .store
            .find_patient(input.id)?
            .ok_or(ClinicError::NotFound(PATIENT_MISSING))?;

        if input.birth_date.is_some_and(|d| d > now()) {
            return Err(ClinicError::Validation(BIRTH_DATE_IN_FUTURE));
        }

        existing.name = input.name;
        existing.surname = input.surname;
        existing.birth_date = input.birth_date;
        self.store.update_patient(&existing)?;

        tracing::info!(patient_id = existing.id, "Patient updated");
        self.with_appointments(existing)
    }

    /// Removes a patient with no appointments and returns the removed record.
    pub fn delete(&self, id: i64) -> ClinicResult<PatientDetails> {
        let patient = self
            .store
            .find_patient(id)?
            .ok_or(ClinicError::NotFound(PATIENT_MISSING))?;
        let details = self.with_appointments(patient)?;

        if !details.appointments.is_empty() {
            return Err(ClinicError::Conflict(PATIENT_HAS_APPOINTMENTS));
        }

        self.store.delete_patient(id)?;
        tracing::info!(patient_id = id, "Patient deleted");
        Ok(details)
    }

    fn with_appointments(&self, patient: Patient) -> ClinicResult<PatientDetails> {
        let appointments = self.store.appointments_for_patient(patient.id)?;
        Ok(PatientDetails { patient, appointments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clinic::test_support::*;
    use crate::clinic::{AppointmentManager, DoctorManager};

    #[test]
    fn list_is_empty_on_fresh_store() {
        let conn = test_db();
        assert!(PatientManager::new(&conn).list().unwrap().is_empty());
    }

    #[test]
    fn create_with_past_birth_date_succeeds() {
        let conn = test_db();
        let created = PatientManager::new(&conn).create(juan()).unwrap();
        assert!(created.patient.id > 0);
        assert_eq!(created.patient.name.as_deref(), Some("Juan"));
        assert!(created.appointments.is_empty());
    }

    #[test]
    fn create_without_birth_date_succeeds() {
        let conn = test_db();
        let input = PatientInput { birth_date: None, ..juan() };
        assert!(PatientManager::new(&conn).create(input).is_ok());
    }

    #[test]
    fn create_with_future_birth_date_fails() {
        let conn = test_db();
        let manager = PatientManager::new(&conn);
        let input = PatientInput { birth_date: Some(tomorrow()), ..juan() };

        let err = manager.create(input).unwrap_err();
        assert!(matches!(err, ClinicError::Validation(BIRTH_DATE_AFTER_TODAY)));
        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn get_missing_patient_reports_not_found() {
        let conn = test_db();
        let err = PatientManager::new(&conn).get(1).unwrap_err();
        assert_eq!(err.message(), Some("El paciente no existe"));
        assert!(matches!(err, ClinicError::NotFound(_)));
    }

    #[test]
    fn update_copies_fields_including_birth_date() {
        let conn = test_db();
        let manager = PatientManager::new(&conn);
        let created = manager.create(juan()).unwrap();

        let new_birth = chrono::NaiveDate::from_ymd_opt(1985, 6, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0);
        let updated = manager
            .update(PatientInput {
                id: created.patient.id,
                name: Some("Juan Carlos".into()),
                surname: Some("Pérez".into()),
                birth_date: new_birth,
            })
            .unwrap();

        assert_eq!(updated.patient.name.as_deref(), Some("Juan Carlos"));
        let fetched = manager.get(created.patient.id).unwrap();
        assert_eq!(fetched.patient.surname.as_deref(), Some("Pérez"));
        assert_eq!(fetched.patient.birth_date, new_birth);
    }

    #[test]
    fn update_missing_patient_fails() {
        let conn = test_db();
        let err = PatientManager::new(&conn)
            .update(PatientInput { id: 99, ..juan() })
            .unwrap_err();
        assert!(matches!(err, ClinicError::NotFound(PATIENT_MISSING)));
    }

    #[test]
    fn update_with_future_birth_date_fails_and_keeps_record() {
        let conn = test_db();
        let manager = PatientManager::new(&conn);
        let created = manager.create(juan()).unwrap();

        let err = manager
            .update(PatientInput {
                id: created.patient.id,
                name: Some("Otro".into()),
                surname: None,
                birth_date: Some(tomorrow()),
            })
            .unwrap_err();
        assert!(matches!(err, ClinicError::Validation(BIRTH_DATE_IN_FUTURE)));

        let fetched = manager.get(created.patient.id).unwrap();
        assert_eq!(fetched.patient, created.patient);
    }

    #[test]
    fn delete_without_appointments_removes_patient() {
        let conn = test_db();
        let manager = PatientManager::new(&conn);
        let created = manager.create(juan()).unwrap();

        let removed = manager.delete(created.patient.id).unwrap();
        assert_eq!(removed.patient.id, created.patient.id);
        assert!(matches!(
            manager.get(created.patient.id),
            Err(ClinicError::NotFound(_))
        ));
    }

    #[test]
    fn delete_missing_patient_fails() {
        let conn = test_db();
        let err = PatientManager::new(&conn).delete(5).unwrap_err();
        assert!(matches!(err, ClinicError::NotFound(PATIENT_MISSING)));
    }

    #[test]
    fn delete_with_appointments_is_blocked() {
        let conn = test_db();
        let manager = PatientManager::new(&conn);
        let patient = manager.create(juan()).unwrap().patient;
        let doctor = DoctorManager::new(&conn).create(dr_smith()).unwrap().doctor;
        AppointmentManager::new(&conn)
            .create(consultation(patient.id, doctor.id))
            .unwrap();

        let err = manager.delete(patient.id).unwrap_err();
        assert!(matches!(err, ClinicError::Conflict(PATIENT_HAS_APPOINTMENTS)));

        let still_there = manager.get(patient.id).unwrap();
        assert_eq!(still_there.appointments.len(), 1);
    }
}
