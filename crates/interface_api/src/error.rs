//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_employee::EmployeeError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Single-record lookups answer an unknown id with a bare 404,
            // no body.
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Conflict(msg) => error_body(StatusCode::CONFLICT, "conflict", msg),
            ApiError::Internal(msg) => {
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        }
    }
}

fn error_body(status: StatusCode, error_type: &str, message: String) -> Response {
    let body = ErrorResponse {
        error: error_type.to_string(),
        message,
    };
    (status, Json(body)).into_response()
}

/// Maps domain failures onto HTTP semantics: the duplicate-email business
/// rule is a client error (409), everything else from the repository is an
/// internal failure.
impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::DuplicateEmail(email) => ApiError::Conflict(format!(
                "Employee already exists with given email: {}",
                email
            )),
            EmployeeError::Repository(err) => ApiError::Internal(err.to_string()),
        }
    }
}
