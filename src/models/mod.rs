pub mod appointment;
pub mod datetime;
pub mod doctor;
pub mod money;
pub mod patient;
pub mod procedure;

pub use appointment::*;
pub use doctor::*;
pub use money::*;
pub use patient::*;
pub use procedure::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn patient_input_reads_client_field_names() {
        let input: PatientInput = serde_json::from_str(
            r#"{"nombre":"Juan","apellido":"Perez","fechaNacimiento":"1980-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(input.id, 0);
        assert_eq!(input.name.as_deref(), Some("Juan"));
        assert_eq!(input.surname.as_deref(), Some("Perez"));
        assert_eq!(
            input.birth_date,
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap().and_hms_opt(0, 0, 0)
        );
    }

    #[test]
    fn missing_fields_default_to_none() {
        let input: AppointmentInput = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(input.id, 4);
        assert!(input.date.is_none());
        assert!(input.patient_id.is_none());
        assert!(input.doctor_id.is_none());
    }

    #[test]
    fn details_flatten_entity_fields() {
        let details = DoctorDetails {
            doctor: Doctor {
                id: 3,
                name: Some("Dr. Smith".into()),
                specialty: Some("Cardiología".into()),
            },
            appointments: vec![],
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["especialidad"], "Cardiología");
        assert!(json["citas"].as_array().unwrap().is_empty());
    }

    #[test]
    fn procedure_cost_round_trips_through_json() {
        let input: ProcedureInput =
            serde_json::from_str(r#"{"descripcion":"ECG","costo":150.5,"citaId":1}"#).unwrap();
        assert_eq!(input.cost, Some(Money::from_cents(15_050)));

        let json = serde_json::to_value(Procedure {
            id: 1,
            description: input.description,
            cost: input.cost,
            appointment_id: input.appointment_id,
        })
        .unwrap();
        assert_eq!(json["costo"], 150.5);
    }
}
