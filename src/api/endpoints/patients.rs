//! Patient endpoints.
//!
//! - `GET /api/pacientes`: list
//! - `GET /api/pacientes/:id`: one record
//! - `POST /api/pacientes`: create
//! - `PUT /api/pacientes`: update (id in body)
//! - `DELETE /api/pacientes/:id`: delete, returns the removed record

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::clinic::PatientManager;
use crate::models::{PatientDetails, PatientInput};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<PatientDetails>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let patients = PatientManager::new(&conn).list()?;
    Ok(Json(patients))
}

pub async fn get(
    State(ctx): State<ApiContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PatientDetails>, ApiError> {
    let Path(id) = id?;
    let conn = ctx.core.open_db()?;
    Ok(Json(PatientManager::new(&conn).get(id)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<PatientInput>, JsonRejection>,
) -> Result<Json<PatientDetails>, ApiError> {
    let Json(input) = payload?;
    let conn = ctx.core.open_db()?;
    Ok(Json(PatientManager::new(&conn).create(input)?))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    payload: Result<Json<PatientInput>, JsonRejection>,
) -> Result<Json<PatientDetails>, ApiError> {
    let Json(input) = payload?;
    let conn = ctx.core.open_db()?;
    Ok(Json(PatientManager::new(&conn).update(input)?))
}

pub async fn delete(
    State(ctx): State<ApiContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PatientDetails>, ApiError> {
    let Path(id) = id?;
    let conn = ctx.core.open_db()?;
    Ok(Json(PatientManager::new(&conn).delete(id)?))
}
