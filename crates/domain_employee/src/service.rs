//! Employee domain service
//!
//! Wraps the repository port with the one business rule in the system: a
//! create is rejected when the email address is already in use. Every other
//! operation forwards to the repository unchanged.
//!
//! The duplicate check and the subsequent insert are two separate round trips
//! to the store with no atomicity between them; two concurrent creates for
//! the same email can both pass the check. The store carries no unique
//! constraint, so this is a known benign race rather than an invariant.

use std::sync::Arc;

use uuid::Uuid;

use crate::employee::{Employee, NewEmployee};
use crate::error::EmployeeError;
use crate::ports::EmployeeRepository;

/// Stateless service over the employee repository port
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Creates a new service backed by the given repository adapter
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new employee after checking email uniqueness.
    ///
    /// # Errors
    ///
    /// `EmployeeError::DuplicateEmail` when the email is already in use; in
    /// that case the underlying insert is never invoked.
    pub async fn save_employee(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        if let Some(existing) = self.repository.find_by_email(&employee.email).await? {
            return Err(EmployeeError::DuplicateEmail(existing.email));
        }
        let saved = self.repository.insert(employee).await?;
        tracing::info!(employee_id = %saved.id, "employee created");
        Ok(saved)
    }

    /// Returns all employees, unfiltered
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.repository.find_all().await?)
    }

    /// Returns the employee with the given id, if any
    pub async fn get_employee_by_id(&self, id: Uuid) -> Result<Option<Employee>, EmployeeError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns the single employee with the given first and last name.
    ///
    /// # Errors
    ///
    /// Propagates `RepositoryError::NotFound` / `AmbiguousResult` from the
    /// repository when zero or multiple rows match.
    pub async fn find_employee_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Employee, EmployeeError> {
        Ok(self
            .repository
            .find_by_first_and_last_name(first_name, last_name)
            .await?)
    }

    /// Persists updated fields for an existing employee.
    ///
    /// The employee must carry its existing id; no existence check is
    /// performed at this layer (the API layer checks before calling).
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let saved = self.repository.save(employee).await?;
        tracing::info!(employee_id = %saved.id, "employee updated");
        Ok(saved)
    }

    /// Deletes the employee with the given id; succeeds even when the id
    /// never existed.
    pub async fn delete_employee_by_id(&self, id: Uuid) -> Result<(), EmployeeError> {
        self.repository.delete_by_id(id).await?;
        tracing::info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}
