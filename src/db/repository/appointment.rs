use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::*;

const APPOINTMENT_COLUMNS: &str = "id, date, description, patient_id, doctor_id";

fn row_to_appointment(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        date: row.get(1)?,
        description: row.get(2)?,
        patient_id: row.get(3)?,
        doctor_id: row.get(4)?,
    })
}

fn query_appointments(
    conn: &Connection,
    filter: &str,
    param: Option<i64>,
) -> Result<Vec<Appointment>, DatabaseError> {
    let sql = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments {filter} ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = match param {
        Some(value) => stmt.query_map(params![value], row_to_appointment)?,
        None => stmt.query_map([], row_to_appointment)?,
    };
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn insert_appointment(
    conn: &Connection,
    input: &AppointmentInput,
) -> Result<Appointment, DatabaseError> {
    conn.execute(
        "INSERT INTO appointments (date, description, patient_id, doctor_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![input.date, input.description, input.patient_id, input.doctor_id],
    )?;
    Ok(Appointment {
        id: conn.last_insert_rowid(),
        date: input.date,
        description: input.description.clone(),
        patient_id: input.patient_id,
        doctor_id: input.doctor_id,
    })
}

pub fn get_appointment(conn: &Connection, id: i64) -> Result<Option<Appointment>, DatabaseError> {
    conn.query_row(
        &format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = ?1"),
        params![id],
        row_to_appointment,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn get_all_appointments(conn: &Connection) -> Result<Vec<Appointment>, DatabaseError> {
    query_appointments(conn, "", None)
}

pub fn get_appointments_by_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Appointment>, DatabaseError> {
    query_appointments(conn, "WHERE patient_id = ?1", Some(patient_id))
}

pub fn get_appointments_by_doctor(
    conn: &Connection,
    doctor_id: i64,
) -> Result<Vec<Appointment>, DatabaseError> {
    query_appointments(conn, "WHERE doctor_id = ?1", Some(doctor_id))
}

pub fn update_appointment(conn: &Connection, appt: &Appointment) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE appointments SET date = ?1, description = ?2, patient_id = ?3, doctor_id = ?4
         WHERE id = ?5",
        params![appt.date, appt.description, appt.patient_id, appt.doctor_id, appt.id],
    )?;
    if changed == 0 {
        return Err(DatabaseError::not_found("Appointment", appt.id));
    }
    Ok(())
}

pub fn delete_appointment(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    let changed = conn.execute("DELETE FROM appointments WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::not_found("Appointment", id));
    }
    Ok(())
}
