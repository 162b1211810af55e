use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use service::auto::domain::{AutoChanges, CreateAutoInput};

use crate::errors::{ApiError, Operation};
use crate::state::ServerState;

/// Body returned by create, replace and patch.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AutoIdResponse {
    pub auto_id: i32,
}

type AutoPath = Result<Path<i32>, PathRejection>;

fn auto_id(path: AutoPath) -> Result<i32, ApiError> {
    let Path(auto_id) = path.map_err(ApiError::from_path_rejection)?;
    Ok(auto_id)
}

#[utoipa::path(
    get, path = "/auto", tag = "auto",
    responses(
        (status = 200, description = "List of autos", body = [crate::openapi::AutoDoc]),
        (status = 500, description = "An error occurred while retrieving autos", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::auto::Model>>, ApiError> {
    let autos = state
        .autos
        .list()
        .await
        .map_err(|e| ApiError::from_service(Operation::List, None, e))?;
    Ok(Json(autos))
}

#[utoipa::path(
    get, path = "/auto/{auto_id}", tag = "auto",
    params(("auto_id" = i32, Path, description = "The ID of the auto")),
    responses(
        (status = 200, description = "The auto details", body = crate::openapi::AutoDoc),
        (status = 404, description = "Auto not found", body = crate::openapi::ErrorResponse),
        (status = 500, description = "An error occurred while retrieving the auto", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, path: AutoPath) -> Result<Json<models::auto::Model>, ApiError> {
    let id = auto_id(path)?;
    let found = state
        .autos
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(Operation::Get, Some(id), e))?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/auto", tag = "auto",
    request_body = crate::openapi::CreateAutoRequest,
    responses(
        (status = 201, description = "Auto created successfully", body = AutoIdResponse),
        (status = 500, description = "An error occurred while creating the auto", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CreateAutoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AutoIdResponse>), ApiError> {
    let Json(input) = body.map_err(|e| ApiError::from_json_rejection(Operation::Create, None, e))?;
    let created = state
        .autos
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(Operation::Create, None, e))?;
    Ok((StatusCode::CREATED, Json(AutoIdResponse { auto_id: created.auto_id })))
}

#[utoipa::path(
    put, path = "/auto/{auto_id}", tag = "auto",
    params(("auto_id" = i32, Path, description = "The ID of the auto")),
    request_body = crate::openapi::UpdateAutoRequest,
    responses(
        (status = 200, description = "Auto updated successfully", body = AutoIdResponse),
        (status = 404, description = "Auto not found", body = crate::openapi::ErrorResponse),
        (status = 500, description = "An error occurred while updating the auto", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    path: AutoPath,
    body: Result<Json<AutoChanges>, JsonRejection>,
) -> Result<Json<AutoIdResponse>, ApiError> {
    let id = auto_id(path)?;
    let Json(changes) = body.map_err(|e| ApiError::from_json_rejection(Operation::Replace, Some(id), e))?;
    let updated = state
        .autos
        .replace(id, changes)
        .await
        .map_err(|e| ApiError::from_service(Operation::Replace, Some(id), e))?;
    Ok(Json(AutoIdResponse { auto_id: updated.auto_id }))
}

#[utoipa::path(
    patch, path = "/auto/{auto_id}", tag = "auto",
    params(("auto_id" = i32, Path, description = "The ID of the auto")),
    request_body = crate::openapi::UpdateAutoRequest,
    responses(
        (status = 200, description = "Auto partially updated successfully", body = AutoIdResponse),
        (status = 404, description = "Auto not found", body = crate::openapi::ErrorResponse),
        (status = 500, description = "An error occurred while partially updating the auto", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    path: AutoPath,
    body: Result<Json<AutoChanges>, JsonRejection>,
) -> Result<Json<AutoIdResponse>, ApiError> {
    let id = auto_id(path)?;
    let Json(changes) = body.map_err(|e| ApiError::from_json_rejection(Operation::Patch, Some(id), e))?;
    let updated = state
        .autos
        .patch(id, changes)
        .await
        .map_err(|e| ApiError::from_service(Operation::Patch, Some(id), e))?;
    Ok(Json(AutoIdResponse { auto_id: updated.auto_id }))
}

#[utoipa::path(
    delete, path = "/auto/{auto_id}", tag = "auto",
    params(("auto_id" = i32, Path, description = "The ID of the auto")),
    responses(
        (status = 204, description = "Auto deleted successfully"),
        (status = 404, description = "Auto not found", body = crate::openapi::ErrorResponse),
        (status = 500, description = "An error occurred while deleting the auto", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<ServerState>, path: AutoPath) -> Result<StatusCode, ApiError> {
    let id = auto_id(path)?;
    state
        .autos
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(Operation::Delete, Some(id), e))?;
    Ok(StatusCode::NO_CONTENT)
}
