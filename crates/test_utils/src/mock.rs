//! In-memory mock adapter for the employee repository port
//!
//! Backs handler and service tests that do not need a real database. Rows
//! live in a mutex-guarded map; ids are generated on insert like the record
//! store would.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use domain_employee::{Employee, EmployeeRepository, NewEmployee, RepositoryError};

/// Mock repository holding employees in process memory
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    rows: Mutex<HashMap<Uuid, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock repository pre-populated with the given employees
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let rows = employees.into_iter().map(|e| (e.id, e)).collect();
        Self {
            rows: Mutex::new(rows),
        }
    }

    /// Returns the number of stored employees
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Returns true when no employees are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, RepositoryError> {
        let employee = employee.with_id(Uuid::new_v4());
        self.rows
            .lock()
            .unwrap()
            .insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Employee, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        let mut matches = rows
            .values()
            .filter(|e| e.first_name == first_name && e.last_name == last_name);
        match (matches.next(), matches.next()) {
            (Some(employee), None) => Ok(employee.clone()),
            (None, _) => Err(RepositoryError::NotFound(format!(
                "Employee named '{} {}' not found",
                first_name, last_name
            ))),
            (Some(_), Some(_)) => Err(RepositoryError::AmbiguousResult(format!(
                "Multiple employees named '{} {}'",
                first_name, last_name
            ))),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}
