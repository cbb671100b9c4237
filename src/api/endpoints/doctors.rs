//! Doctor endpoints under `/api/doctores`. Same shape as the other resources.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::clinic::DoctorManager;
use crate::models::{DoctorDetails, DoctorInput};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<DoctorDetails>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let doctors = DoctorManager::new(&conn).list()?;
    Ok(Json(doctors))
}

pub async fn get(
    State(ctx): State<ApiContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DoctorDetails>, ApiError> {
    let Path(id) = id?;
    let conn = ctx.core.open_db()?;
    Ok(Json(DoctorManager::new(&conn).get(id)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<DoctorInput>, JsonRejection>,
) -> Result<Json<DoctorDetails>, ApiError> {
    let Json(input) = payload?;
    let conn = ctx.core.open_db()?;
    Ok(Json(DoctorManager::new(&conn).create(input)?))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    payload: Result<Json<DoctorInput>, JsonRejection>,
) -> Result<Json<DoctorDetails>, ApiError> {
    let Json(input) = payload?;
    let conn = ctx.core.open_db()?;
    Ok(Json(DoctorManager::new(&conn).update(input)?))
}

pub async fn delete(
    State(ctx): State<ApiContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DoctorDetails>, ApiError> {
    let Path(id) = id?;
    let conn = ctx.core.open_db()?;
    Ok(Json(DoctorManager::new(&conn).delete(id)?))
}
