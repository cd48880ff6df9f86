//! Domain error types
//!
//! Two layers of errors live here: [`RepositoryError`] is what the repository
//! port surfaces to the domain, and [`EmployeeError`] is what the domain
//! service surfaces to its callers.

use thiserror::Error;

/// Errors surfaced by implementations of the repository port
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record matched a lookup that requires exactly one result
    #[error("Employee not found: {0}")]
    NotFound(String),

    /// More than one record matched a lookup that requires exactly one result
    #[error("Ambiguous result: {0}")]
    AmbiguousResult(String),

    /// The underlying store failed (connectivity, query, constraint)
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by the domain service
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// A create targeted an email address that is already in use
    #[error("Employee already exists with given email: {0}")]
    DuplicateEmail(String),

    /// The repository failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl EmployeeError {
    /// Checks whether this error is the duplicate-email business rule
    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, EmployeeError::DuplicateEmail(_))
    }
}
