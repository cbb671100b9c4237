use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::*;

fn row_to_doctor(row: &Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        id: row.get(0)?,
        name: row.get(1)?,
        specialty: row.get(2)?,
    })
}

pub fn insert_doctor(conn: &Connection, input: &DoctorInput) -> Result<Doctor, DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (name, specialty) VALUES (?1, ?2)",
        params![input.name, input.specialty],
    )?;
    Ok(Doctor {
        id: conn.last_insert_rowid(),
        name: input.name.clone(),
        specialty: input.specialty.clone(),
    })
}

pub fn get_doctor(conn: &Connection, id: i64) -> Result<Option<Doctor>, DatabaseError> {
    conn.query_row(
        "SELECT id, name, specialty FROM doctors WHERE id = ?1",
        params![id],
        row_to_doctor,
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// Find a doctor by its (name, specialty) pair. `IS` makes NULL match NULL.
pub fn find_doctor_by_name_and_specialty(
    conn: &Connection,
    name: Option<&str>,
    specialty: Option<&str>,
) -> Result<Option<Doctor>, DatabaseError> {
    conn.query_row(
        "SELECT id, name, specialty FROM doctors
         WHERE name IS ?1 AND specialty IS ?2
         ORDER BY id LIMIT 1",
        params![name, specialty],
        row_to_doctor,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn get_all_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name, specialty FROM doctors ORDER BY id")?;
    let rows = stmt.query_map([], row_to_doctor)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn update_doctor(conn: &Connection, doctor: &Doctor) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE doctors SET name = ?1, specialty = ?2 WHERE id = ?3",
        params![doctor.name, doctor.specialty, doctor.id],
    )?;
    if changed == 0 {
        return Err(DatabaseError::not_found("Doctor", doctor.id));
    }
    Ok(())
}

pub fn delete_doctor(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    let changed = conn.execute("DELETE FROM doctors WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::not_found("Doctor", id));
    }
    Ok(())
}
