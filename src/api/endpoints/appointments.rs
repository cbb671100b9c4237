//! Appointment endpoints.
//!
//! - `GET /api/citas`: list
//! - `GET /api/citas/:id`: one record
//! - `POST /api/citas`: create
//! - `PUT /api/citas`: update (id in body)
//! - `DELETE /api/citas/:id`: delete, returns the removed record

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::clinic::AppointmentManager;
use crate::models::{AppointmentDetails, AppointmentInput};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<AppointmentDetails>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let appointments = AppointmentManager::new(&conn).list()?;
    Ok(Json(appointments))
}

pub async fn get(
    State(ctx): State<ApiContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AppointmentDetails>, ApiError> {
    let Path(id) = id?;
    let conn = ctx.core.open_db()?;
    Ok(Json(AppointmentManager::new(&conn).get(id)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AppointmentInput>, JsonRejection>,
) -> Result<Json<AppointmentDetails>, ApiError> {
    let Json(input) = payload?;
    let conn = ctx.core.open_db()?;
    Ok(Json(AppointmentManager::new(&conn).create(input)?))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AppointmentInput>, JsonRejection>,
) -> Result<Json<AppointmentDetails>, ApiError> {
    let Json(input) = payload?;
    let conn = ctx.core.open_db()?;
    Ok(Json(AppointmentManager::new(&conn).update(input)?))
}

pub async fn delete(
    State(ctx): State<ApiContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AppointmentDetails>, ApiError> {
    let Path(id) = id?;
    let conn = ctx.core.open_db()?;
    Ok(Json(AppointmentManager::new(&conn).delete(id)?))
}
