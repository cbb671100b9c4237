//! Repository layer: entity-scoped database operations.
//!
//! Each sub-module holds the SQL for one table as free functions over a
//! `Connection`. `ClinicStore` bundles them into the storage interface the
//! managers in `crate::clinic` are written against.

mod appointment;
mod doctor;
mod patient;
mod procedure;

use rusqlite::Connection;

use super::DatabaseError;
use crate::models::*;

pub use appointment::*;
pub use doctor::*;
pub use patient::*;
pub use procedure::*;

/// Storage operations needed by the clinic managers, scoped per entity.
pub trait ClinicStore {
    // Patients
    fn list_patients(&self) -> Result<Vec<Patient>, DatabaseError>;
    fn find_patient(&self, id: i64) -> Result<Option<Patient>, DatabaseError>;
    fn insert_patient(&self, input: &PatientInput) -> Result<Patient, DatabaseError>;
    fn update_patient(&self, patient: &Patient) -> Result<(), DatabaseError>;
    fn delete_patient(&self, id: i64) -> Result<(), DatabaseError>;
    fn appointments_for_patient(&self, patient_id: i64) -> Result<Vec<Appointment>, DatabaseError>;

    // Doctors
    fn list_doctors(&self) -> Result<Vec<Doctor>, DatabaseError>;
    fn find_doctor(&self, id: i64) -> Result<Option<Doctor>, DatabaseError>;
    fn find_doctor_by_identity(
        &self,
        name: Option<&str>,
        specialty: Option<&str>,
    ) -> Result<Option<Doctor>, DatabaseError>;
    fn insert_doctor(&self, input: &DoctorInput) -> Result<Doctor, DatabaseError>;
    fn update_doctor(&self, doctor: &Doctor) -> Result<(), DatabaseError>;
    fn delete_doctor(&self, id: i64) -> Result<(), DatabaseError>;
    fn appointments_for_doctor(&self, doctor_id: i64) -> Result<Vec<Appointment>, DatabaseError>;

    // Appointments
    fn list_appointments(&self) -> Result<Vec<Appointment>, DatabaseError>;
    fn find_appointment(&self, id: i64) -> Result<Option<Appointment>, DatabaseError>;
    fn insert_appointment(&self, input: &AppointmentInput) -> Result<Appointment, DatabaseError>;
    fn update_appointment(&self, appointment: &Appointment) -> Result<(), DatabaseError>;
    fn delete_appointment(&self, id: i64) -> Result<(), DatabaseError>;
    fn procedures_for_appointment(
        &self,
        appointment_id: i64,
    ) -> Result<Vec<Procedure>, DatabaseError>;

    // Procedures
    fn list_procedures(&self) -> Result<Vec<Procedure>, DatabaseError>;
    fn find_procedure(&self, id: i64) -> Result<Option<Procedure>, DatabaseError>;
    fn insert_procedure(&self, input: &ProcedureInput) -> Result<Procedure, DatabaseError>;
    fn update_procedure(&self, procedure: &Procedure) -> Result<(), DatabaseError>;
    fn delete_procedure(&self, id: i64) -> Result<(), DatabaseError>;
}

impl ClinicStore for Connection {
    fn list_patients(&self) -> Result<Vec<Patient>, DatabaseError> {
        patient::get_all_patients(self)
    }

    fn find_patient(&self, id: i64) -> Result<Option<Patient>, DatabaseError> {
        patient::get_patient(self, id)
    }

    fn insert_patient(&self, input: &PatientInput) -> Result<Patient, DatabaseError> {
        patient::insert_patient(self, input)
    }

    fn update_patient(&self, p: &Patient) -> Result<(), DatabaseError> {
        patient::update_patient(self, p)
    }

    fn delete_patient(&self, id: i64) -> Result<(), DatabaseError> {
        patient::delete_patient(self, id)
    }

    fn appointments_for_patient(&self, patient_id: i64) -> Result<Vec<Appointment>, DatabaseError> {
        appointment::get_appointments_by_patient(self, patient_id)
    }

    fn list_doctors(&self) -> Result<Vec<Doctor>, DatabaseError> {
        doctor::get_all_doctors(self)
    }

    fn find_doctor(&self, id: i64) -> Result<Option<Doctor>, DatabaseError> {
        doctor::get_doctor(self, id)
    }

    fn find_doctor_by_identity(
        &self,
        name: Option<&str>,
        specialty: Option<&str>,
    ) -> Result<Option<Doctor>, DatabaseError> {
        doctor::find_doctor_by_name_and_specialty(self, name, specialty)
    }

    fn insert_doctor(&self, input: &DoctorInput) -> Result<Doctor, DatabaseError> {
        doctor::insert_doctor(self, input)
    }

    fn update_doctor(&self, d: &Doctor) -> Result<(), DatabaseError> {
        doctor::update_doctor(self, d)
    }

    fn delete_doctor(&self, id: i64) -> Result<(), DatabaseError> {
        doctor::delete_doctor(self, id)
    }

    fn appointments_for_doctor(&self, doctor_id: i64) -> Result<Vec<Appointment>, DatabaseError> {
        appointment::get_appointments_by_doctor(self, doctor_id)
    }

    fn list_appointments(&self) -> Result<Vec<Appointment>, DatabaseError> {
        appointment::get_all_appointments(self)
    }

    fn find_appointment(&self, id: i64) -> Result<Option<Appointment>, DatabaseError> {
        appointment::get_appointment(self, id)
    }

    fn insert_appointment(&self, input: &AppointmentInput) -> Result<Appointment, DatabaseError> {
        appointment::insert_appointment(self, input)
    }

    fn update_appointment(&self, a: &Appointment) -> Result<(), DatabaseError> {
        appointment::update_appointment(self, a)
    }

    fn delete_appointment(&self, id: i64) -> Result<(), DatabaseError> {
        appointment::delete_appointment(self, id)
    }

    fn procedures_for_appointment(
        &self,
        appointment_id: i64,
    ) -> Result<Vec<Procedure>, DatabaseError> {
        procedure::get_procedures_by_appointment(self, appointment_id)
    }

    fn list_procedures(&self) -> Result<Vec<Procedure>, DatabaseError> {
        procedure::get_all_procedures(self)
    }

    fn find_procedure(&self, id: i64) -> Result<Option<Procedure>, DatabaseError> {
        procedure::get_procedure(self, id)
    }

    fn insert_procedure(&self, input: &ProcedureInput) -> Result<Procedure, DatabaseError> {
        procedure::insert_procedure(self, input)
    }

    fn update_procedure(&self, p: &Procedure) -> Result<(), DatabaseError> {
        procedure::update_procedure(self, p)
    }

    fn delete_procedure(&self, id: i64) -> Result<(), DatabaseError> {
        procedure::delete_procedure(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use chrono::NaiveDate;

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    fn make_patient(conn: &Connection) -> Patient {
        insert_patient(conn, &PatientInput {
            id: 0,
            name: Some("Juan".into()),
            surname: Some("Perez".into()),
            birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap().and_hms_opt(0, 0, 0),
        })
        .unwrap()
    }

    fn make_doctor(conn: &Connection, name: &str, specialty: &str) -> Doctor {
        insert_doctor(conn, &DoctorInput {
            id: 0,
            name: Some(name.into()),
            specialty: Some(specialty.into()),
        })
        .unwrap()
    }

    fn make_appointment(conn: &Connection, patient_id: i64, doctor_id: i64) -> Appointment {
        insert_appointment(conn, &AppointmentInput {
            id: 0,
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap().and_hms_opt(9, 30, 0),
            description: Some("Consulta".into()),
            patient_id: Some(patient_id),
            doctor_id: Some(doctor_id),
        })
        .unwrap()
    }

    #[test]
    fn patient_insert_and_retrieve() {
        let conn = test_db();
        let created = make_patient(&conn);
        assert!(created.id > 0);

        let fetched = get_patient(&conn, created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn missing_rows_return_none() {
        let conn = test_db();
        assert!(get_patient(&conn, 1).unwrap().is_none());
        assert!(get_doctor(&conn, 1).unwrap().is_none());
        assert!(get_appointment(&conn, 1).unwrap().is_none());
        assert!(get_procedure(&conn, 1).unwrap().is_none());
    }

    #[test]
    fn ids_are_assigned_sequentially() {
        let conn = test_db();
        let first = make_doctor(&conn, "Dr. Smith", "Cardiología");
        let second = make_doctor(&conn, "Dr. Jones", "Pediatría");
        assert!(second.id > first.id);
    }

    #[test]
    fn doctor_identity_lookup_matches_both_fields() {
        let conn = test_db();
        let smith = make_doctor(&conn, "Dr. Smith", "Cardiología");

        let found = find_doctor_by_name_and_specialty(&conn, Some("Dr. Smith"), Some("Cardiología"))
            .unwrap()
            .unwrap();
        assert_eq!(found.id, smith.id);

        assert!(find_doctor_by_name_and_specialty(&conn, Some("Dr. Smith"), Some("Neurología"))
            .unwrap()
            .is_none());
        assert!(find_doctor_by_name_and_specialty(&conn, Some("Dr. Smyth"), Some("Cardiología"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn doctor_identity_lookup_treats_null_as_equal() {
        let conn = test_db();
        insert_doctor(&conn, &DoctorInput::default()).unwrap();
        assert!(find_doctor_by_name_and_specialty(&conn, None, None)
            .unwrap()
            .is_some());
    }

    #[test]
    fn appointments_filtered_by_parent() {
        let conn = test_db();
        let patient = make_patient(&conn);
        let smith = make_doctor(&conn, "Dr. Smith", "Cardiología");
        let jones = make_doctor(&conn, "Dr. Jones", "Pediatría");
        make_appointment(&conn, patient.id, smith.id);
        make_appointment(&conn, patient.id, jones.id);

        assert_eq!(get_appointments_by_patient(&conn, patient.id).unwrap().len(), 2);
        assert_eq!(get_appointments_by_doctor(&conn, smith.id).unwrap().len(), 1);
        assert_eq!(get_all_appointments(&conn).unwrap().len(), 2);
    }

    #[test]
    fn procedure_cost_stored_as_cents() {
        let conn = test_db();
        let patient = make_patient(&conn);
        let doctor = make_doctor(&conn, "Dr. Smith", "Cardiología");
        let appt = make_appointment(&conn, patient.id, doctor.id);

        let proc = insert_procedure(&conn, &ProcedureInput {
            id: 0,
            description: Some("Electrocardiograma".into()),
            cost: Some(Money::from_cents(12_550)),
            appointment_id: Some(appt.id),
        })
        .unwrap();

        let raw: i64 = conn
            .query_row(
                "SELECT cost_cents FROM procedures WHERE id = ?1",
                rusqlite::params![proc.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(raw, 12_550);

        let fetched = get_procedures_by_appointment(&conn, appt.id).unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].cost, Some(Money::from_cents(12_550)));
    }

    #[test]
    fn update_missing_row_is_not_found() {
        let conn = test_db();
        let err = update_doctor(&conn, &Doctor { id: 42, name: None, specialty: None }).unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[test]
    fn delete_missing_row_is_not_found() {
        let conn = test_db();
        let err = delete_procedure(&conn, 7).unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[test]
    fn update_patient_overwrites_fields() {
        let conn = test_db();
        let mut patient = make_patient(&conn);
        patient.name = Some("Juana".into());
        patient.birth_date = None;
        update_patient(&conn, &patient).unwrap();

        let fetched = get_patient(&conn, patient.id).unwrap().unwrap();
        assert_eq!(fetched.name.as_deref(), Some("Juana"));
        assert!(fetched.birth_date.is_none());
    }

    #[test]
    fn foreign_keys_reject_dangling_reference() {
        let conn = test_db();
        let result = insert_procedure(&conn, &ProcedureInput {
            id: 0,
            description: None,
            cost: None,
            appointment_id: Some(999),
        });
        assert!(matches!(result, Err(DatabaseError::Sqlite(_))));
    }

    #[test]
    fn store_trait_delegates_to_connection() {
        let conn = test_db();
        let store: &dyn ClinicStore = &conn;
        let patient = store
            .insert_patient(&PatientInput {
                name: Some("Ana".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(store.list_patients().unwrap().len(), 1);
        assert!(store.appointments_for_patient(patient.id).unwrap().is_empty());
        store.delete_patient(patient.id).unwrap();
        assert!(store.find_patient(patient.id).unwrap().is_none());
    }
}
