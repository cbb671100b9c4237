//! Procedure endpoints.
//!
//! - `GET /api/procedimientos`: list
//! - `GET /api/procedimientos/:id`: one record
//! - `POST /api/procedimientos`: create
//! - `PUT /api/procedimientos`: update (id in body)
//! - `DELETE /api/procedimientos/:id`: delete, returns the removed record

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::clinic::ProcedureManager;
use crate::models::{ProcedureDetails, ProcedureInput};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<ProcedureDetails>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let procedures = ProcedureManager::new(&conn).list()?;
    Ok(Json(procedures))
}

pub async fn get(
    State(ctx): State<ApiContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProcedureDetails>, ApiError> {
    let Path(id) = id?;
    let conn = ctx.core.open_db()?;
    Ok(Json(ProcedureManager::new(&conn).get(id)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ProcedureInput>, JsonRejection>,
) -> Result<Json<ProcedureDetails>, ApiError> {
    let Json(input) = payload?;
    let conn = ctx.core.open_db()?;
    Ok(Json(ProcedureManager::new(&conn).create(input)?))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ProcedureInput>, JsonRejection>,
) -> Result<Json<ProcedureDetails>, ApiError> {
    let Json(input) = payload?;
    let conn = ctx.core.open_db()?;
    Ok(Json(ProcedureManager::new(&conn).update(input)?))
}

pub async fn delete(
    State(ctx): State<ApiContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProcedureDetails>, ApiError> {
    let Path(id) = id?;
    let conn = ctx.core.open_db()?;
    Ok(Json(ProcedureManager::new(&conn).delete(id)?))
}
