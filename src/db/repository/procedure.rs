use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::*;

fn row_to_procedure(row: &Row<'_>) -> rusqlite::Result<Procedure> {
    Ok(Procedure {
        id: row.get(0)?,
        description: row.get(1)?,
        cost: row.get(2)?,
        appointment_id: row.get(3)?,
    })
}

pub fn insert_procedure(
    conn: &Connection,
    input: &ProcedureInput,
) -> Result<Procedure, DatabaseError> {
    conn.execute(
        "INSERT INTO procedures (description, cost_cents, appointment_id) VALUES (?1, ?2, ?3)",
        params![input.description, input.cost, input.appointment_id],
    )?;
    Ok(Procedure {
        id: conn.last_insert_rowid(),
        description: input.description.clone(),
        cost: input.cost,
        appointment_id: input.appointment_id,
    })
}

pub fn get_procedure(conn: &Connection, id: i64) -> Result<Option<Procedure>, DatabaseError> {
    conn.query_row(
        "SELECT id, description, cost_cents, appointment_id FROM procedures WHERE id = ?1",
        params![id],
        row_to_procedure,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn get_all_procedures(conn: &Connection) -> Result<Vec<Procedure>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, description, cost_cents, appointment_id FROM procedures ORDER BY id",
    )?;
    let rows = stmt.query_map([], row_to_procedure)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn get_procedures_by_appointment(
    conn: &Connection,
    appointment_id: i64,
) -> Result<Vec<Procedure>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, description, cost_cents, appointment_id FROM procedures
         WHERE appointment_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![appointment_id], row_to_procedure)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn update_procedure(conn: &Connection, proc: &Procedure) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE procedures SET description = ?1, cost_cents = ?2, appointment_id = ?3
         WHERE id = ?4",
        params![proc.description, proc.cost, proc.appointment_id, proc.id],
    )?;
    if changed == 0 {
        return Err(DatabaseError::not_found("Procedure", proc.id));
    }
    Ok(())
}

pub fn delete_procedure(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    let changed = conn.execute("DELETE FROM procedures WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::not_found("Procedure", id));
    }
    Ok(())
}
