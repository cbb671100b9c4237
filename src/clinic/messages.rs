//! Client-visible failure messages. Existing clients match on these
//! strings, so they must stay verbatim.

pub const PATIENT_NOT_FOUND: &str = "El paciente no existe";
pub const PATIENT_MISSING: &str = "Paciente no existe";
pub const BIRTH_DATE_AFTER_TODAY: &str = "La fecha de nacimiento no puede ser mayor a la fecha actual";
pub const BIRTH_DATE_IN_FUTURE: &str = "La fecha de nacimiento no puede ser futura";
pub const PATIENT_HAS_APPOINTMENTS: &str =
    "No se puede eliminar el paciente porque tiene citas asociadas";

pub const DOCTOR_NOT_FOUND: &str = "El doctor no existe";
pub const DOCTOR_MISSING: &str = "Doctor no existe";
pub const DOCTOR_DUPLICATE: &str = "Ya existe un doctor con el mismo nombre y especialidad";
pub const DOCTOR_HAS_APPOINTMENTS: &str =
    "No se puede eliminar el doctor porque tiene citas asociadas";

pub const APPOINTMENT_NOT_FOUND: &str = "La cita no existe";
pub const APPOINTMENT_MISSING: &str = "Cita no existe";
pub const APPOINTMENT_HAS_PROCEDURES: &str =
    "No se puede eliminar la cita porque tiene procedimientos asociados";

pub const PROCEDURE_NOT_FOUND: &str = "El procedimiento no existe";
pub const PROCEDURE_MISSING: &str = "Procedimiento no existe";
pub const NEGATIVE_COST: &str = "El costo no puede ser negativo";
