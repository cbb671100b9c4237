//! Procedure manager. Procedures are billable items attached to an
//! appointment; they have no dependents and can always be deleted.

use crate::db::ClinicStore;
use crate::models::{Procedure, ProcedureDetails, ProcedureInput};

use super::messages::*;
use super::{ClinicError, ClinicResult};

pub struct ProcedureManager<'s, S: ClinicStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: ClinicStore + ?Sized> ProcedureManager<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> ClinicResult<Vec<ProcedureDetails>> {
        self.store
            .list_procedures()?
            .into_iter()
            .map(|p| self.with_appointment(p))
            .collect()
    }

    pub fn get(&self, id: i64) -> ClinicResult<ProcedureDetails> {
        let procedure = self
            .store
            .find_procedure(id)?
            .ok_or(ClinicError::NotFound(PROCEDURE_NOT_FOUND))?;
        self.with_appointment(procedure)
    }

    pub fn create(&self, input: ProcedureInput) -> ClinicResult<ProcedureDetails> {
        self.check(&input)?;

        let procedure = self.store.insert_procedure(&input)?;
        tracing::info!(
            procedure_id = procedure.id,
            appointment_id = ?procedure.appointment_id,
            "Procedure created"
        );
        self.with_appointment(procedure)
    }

    /// Overwrites description, cost and appointment reference.
    pub fn update(&self, input: ProcedureInput) -> ClinicResult<ProcedureDetails> {
        let existing = self
            .store
            .find_procedure(input.id)?
            .ok_or(ClinicError::NotFound(PROCEDURE_MISSING))?;

        self.check(&input)?;

        let updated = Procedure {
            id: existing.id,
            description: input.description,
            cost: input.cost,
            appointment_id: input.appointment_id,
        };
        self.store.update_procedure(&updated)?;

        tracing::info!(procedure_id = updated.id, "Procedure updated");
        self.with_appointment(updated)
    }

    pub fn delete(&self, id: i64) -> ClinicResult<ProcedureDetails> {
        let procedure = self
            .store
            .find_procedure(id)?
            .ok_or(ClinicError::NotFound(PROCEDURE_MISSING))?;
        let details = self.with_appointment(procedure)?;

        self.store.delete_procedure(id)?;
        tracing::info!(procedure_id = id, "Procedure deleted");
        Ok(details)
    }

    /// Appointment existence first, then cost sign.
    fn check(&self, input: &ProcedureInput) -> ClinicResult<()> {
        let appointment = match input.appointment_id {
            Some(id) => self.store.find_appointment(id)?,
            None => None,
        };
        if appointment.is_none() {
            return Err(ClinicError::Validation(APPOINTMENT_NOT_FOUND));
        }

        if input.cost.is_some_and(|c| c.is_negative()) {
            return Err(ClinicError::Validation(NEGATIVE_COST));
        }

        Ok(())
    }

    fn with_appointment(&self, procedure: Procedure) -> ClinicResult<ProcedureDetails> {
        let appointment = match procedure.appointment_id {
            Some(id) => self.store.find_appointment(id)?,
            None => None,
        };
        Ok(ProcedureDetails { procedure, appointment })
    }
}
