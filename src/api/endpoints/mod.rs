//! API endpoint handlers.
//!
//! One module per resource. Handlers open a connection, hand it to the
//! matching clinic manager and serialize whatever comes back.

pub mod appointments;
pub mod doctors;
pub mod health;
pub mod patients;
pub mod procedures;
