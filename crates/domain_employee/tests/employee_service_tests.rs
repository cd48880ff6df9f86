//! Tests for the employee domain service
//!
//! The service is exercised against a local counting mock of the repository
//! port so that the business rule can be verified in isolation, including the
//! requirement that a rejected create never reaches the underlying insert.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use domain_employee::{
    Employee, EmployeeError, EmployeeRepository, EmployeeService, NewEmployee, RepositoryError,
};

/// In-memory repository that counts insert invocations
#[derive(Default)]
struct CountingRepository {
    rows: Mutex<HashMap<Uuid, Employee>>,
    insert_calls: AtomicUsize,
}

impl CountingRepository {
    fn insert_count(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeRepository for CountingRepository {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, RepositoryError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
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
                "{} {}",
                first_name, last_name
            ))),
            (Some(_), Some(_)) => Err(RepositoryError::AmbiguousResult(format!(
                "{} {}",
                first_name, last_name
            ))),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

fn service() -> (EmployeeService, Arc<CountingRepository>) {
    let repository = Arc::new(CountingRepository::default());
    (EmployeeService::new(repository.clone()), repository)
}

fn ada() -> NewEmployee {
    NewEmployee::new("Ada", "Lovelace", "ada@example.com")
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_save_employee_returns_persisted_employee() {
    let (service, _) = service();

    let saved = service.save_employee(ada()).await.unwrap();

    assert!(!saved.id.is_nil());
    assert_eq!(saved.first_name, "Ada");
    assert_eq!(saved.last_name, "Lovelace");
    assert_eq!(saved.email, "ada@example.com");
}

#[tokio::test]
async fn test_save_employee_with_existing_email_fails() {
    let (service, _) = service();
    service.save_employee(ada()).await.unwrap();

    let err = service
        .save_employee(NewEmployee::new("Augusta", "King", "ada@example.com"))
        .await
        .unwrap_err();

    assert!(err.is_duplicate_email());
}

#[tokio::test]
async fn test_rejected_create_never_invokes_insert() {
    let (service, repository) = service();
    service.save_employee(ada()).await.unwrap();
    assert_eq!(repository.insert_count(), 1);

    let result = service.save_employee(ada()).await;

    assert!(result.is_err());
    assert_eq!(repository.insert_count(), 1);
}

// ============================================================================
// Read
// ============================================================================

#[tokio::test]
async fn test_get_all_employees_on_empty_store_returns_empty() {
    let (service, _) = service();

    let all = service.get_all_employees().await.unwrap();

    assert!(all.is_empty());
}

#[tokio::test]
async fn test_get_all_employees_returns_every_saved_employee() {
    let (service, _) = service();
    service.save_employee(ada()).await.unwrap();
    service
        .save_employee(NewEmployee::new("Grace", "Hopper", "grace@example.com"))
        .await
        .unwrap();

    let all = service.get_all_employees().await.unwrap();

    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_get_employee_by_id_returns_match() {
    let (service, _) = service();
    let saved = service.save_employee(ada()).await.unwrap();

    let found = service.get_employee_by_id(saved.id).await.unwrap();

    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn test_get_employee_by_unknown_id_returns_none() {
    let (service, _) = service();

    let found = service.get_employee_by_id(Uuid::new_v4()).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_employee_by_name_returns_single_match() {
    let (service, _) = service();
    let saved = service.save_employee(ada()).await.unwrap();

    let found = service
        .find_employee_by_name("Ada", "Lovelace")
        .await
        .unwrap();

    assert_eq!(found, saved);
}

#[tokio::test]
async fn test_find_employee_by_unknown_name_fails() {
    let (service, _) = service();

    let err = service
        .find_employee_by_name("Charles", "Babbage")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EmployeeError::Repository(RepositoryError::NotFound(_))
    ));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_employee_persists_new_field_values() {
    let (service, _) = service();
    let mut saved = service.save_employee(ada()).await.unwrap();

    saved.apply(NewEmployee::new("Ada", "King", "countess@example.com"));
    let updated = service.update_employee(saved.clone()).await.unwrap();
    assert_eq!(updated, saved);

    let found = service.get_employee_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(found.last_name, "King");
    assert_eq!(found.email, "countess@example.com");
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_employee_removes_row() {
    let (service, _) = service();
    let saved = service.save_employee(ada()).await.unwrap();

    service.delete_employee_by_id(saved.id).await.unwrap();

    let found = service.get_employee_by_id(saved.id).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (service, _) = service();
    let saved = service.save_employee(ada()).await.unwrap();

    service.delete_employee_by_id(saved.id).await.unwrap();
    service.delete_employee_by_id(saved.id).await.unwrap();
    service.delete_employee_by_id(Uuid::new_v4()).await.unwrap();
}
