use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::*;

fn row_to_patient(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
        birth_date: row.get(3)?,
    })
}

pub fn insert_patient(conn: &Connection, input: &PatientInput) -> Result<Patient, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (name, surname, birth_date) VALUES (?1, ?2, ?3)",
        params![input.name, input.surname, input.birth_date],
    )?;
    Ok(Patient {
        id: conn.last_insert_rowid(),
        name: input.name.clone(),
        surname: input.surname.clone(),
        birth_date: input.birth_date,
    })
}

pub fn get_patient(conn: &Connection, id: i64) -> Result<Option<Patient>, DatabaseError> {
    conn.query_row(
        "SELECT id, name, surname, birth_date FROM patients WHERE id = ?1",
        params![id],
        row_to_patient,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn get_all_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name, surname, birth_date FROM patients ORDER BY id")?;
    let rows = stmt.query_map([], row_to_patient)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn update_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE patients SET name = ?1, surname = ?2, birth_date = ?3 WHERE id = ?4",
        params![patient.name, patient.surname, patient.birth_date, patient.id],
    )?;
    if changed == 0 {
        return Err(DatabaseError::not_found("Patient", patient.id));
    }
    Ok(())
}

pub fn delete_patient(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    let changed = conn.execute("DELETE FROM patients WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::not_found("Patient", id));
    }
    Ok(())
}
