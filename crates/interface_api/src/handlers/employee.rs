//! Employee handlers
//!
//! Thin translation layer between the REST surface and the domain service.
//! The only logic that lives here is the existence check on update and the
//! optional-to-404 mapping for single-record lookups.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::dto::employee::{EmployeeRequest, EmployeeResponse};
use crate::{error::ApiError, AppState};

/// Creates a new employee
///
/// Responds 201 with the persisted record, or 409 when the email address is
/// already in use.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let saved = state.service.save_employee(request.into()).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// Lists all employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = state.service.get_all_employees().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Gets an employee by ID, or 404 with an empty body
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    match state.service.get_employee_by_id(id).await? {
        Some(employee) => Ok(Json(employee.into())),
        None => Err(ApiError::NotFound(format!("Employee '{}' not found", id))),
    }
}

/// Replaces an existing employee's fields
///
/// Looks up the record first; unknown ids answer 404 before any write
/// happens. The stored id is retained regardless of the payload.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let mut employee = state
        .service
        .get_employee_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee '{}' not found", id)))?;

    employee.apply(request.into());
    let updated = state.service.update_employee(employee).await?;
    Ok(Json(updated.into()))
}

/// Deletes an employee by ID
///
/// Responds 200 unconditionally; deleting an unknown id is a no-op.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_employee_by_id(id).await?;
    Ok(StatusCode::OK)
}
