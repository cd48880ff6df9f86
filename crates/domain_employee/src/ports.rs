//! Employee Repository Port
//!
//! This module defines the port interface for employee persistence, enabling
//! swappable implementations:
//!
//! - **Postgres Adapter**: `PgEmployeeRepository` in `infra_db`
//! - **Mock Adapter**: `InMemoryEmployeeRepository` in `test_utils`
//!
//! The adapter is chosen at application startup and injected into
//! [`crate::EmployeeService`] as an `Arc<dyn EmployeeRepository>`; there is
//! no ambient registry or global container.

use async_trait::async_trait;
use uuid::Uuid;

use crate::employee::{Employee, NewEmployee};
use crate::error::RepositoryError;

/// The port trait for employee persistence operations.
///
/// All methods are async and return `Result<T, RepositoryError>` so that
/// adapters backed by different stores report failures uniformly. None of the
/// operations enforce business rules; in particular, no duplicate-email error
/// is raised at this layer.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts a new employee, letting the store generate the id.
    ///
    /// # Returns
    ///
    /// The persisted employee including its generated id
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, RepositoryError>;

    /// Saves an employee that already carries an id (insert-or-replace).
    ///
    /// Used by the update path; the caller supplies the existing id.
    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError>;

    /// Returns every employee. Order is incidental, not contractual.
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Looks up an employee by id, returning `None` when no row matches.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, RepositoryError>;

    /// Exact-match lookup by email, used by the uniqueness check.
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError>;

    /// Looks up the single employee with the given first and last name.
    ///
    /// # Errors
    ///
    /// `RepositoryError::NotFound` when no row matches,
    /// `RepositoryError::AmbiguousResult` when more than one does.
    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Employee, RepositoryError>;

    /// Deletes the employee with the given id; a no-op when absent.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError>;
}
