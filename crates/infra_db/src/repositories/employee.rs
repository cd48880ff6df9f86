//! Employee repository implementation
//!
//! This module provides database access for employee records, implementing
//! the `domain_employee::EmployeeRepository` port over the `employees` table.
//!
//! The table deliberately carries no unique constraint on email; uniqueness
//! is a service-layer check, so a duplicate insert succeeds at this layer.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use domain_employee::{Employee, EmployeeRepository, NewEmployee, RepositoryError};

use crate::error::DatabaseError;

/// Row type mirroring the `employees` table.
///
/// Kept separate from the domain entity so the storage shape can evolve
/// independently; the `From` impl below is the explicit mapping between the
/// two.
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}

/// PostgreSQL-backed employee repository
#[derive(Debug, Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(row.into())
    }

    async fn save(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (id, first_name, last_name, email)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, first_name, last_name, email FROM employees",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(row.map(Employee::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, first_name, last_name, email FROM employees WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(row.map(Employee::from))
    }

    async fn find_by_first_and_last_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Employee, RepositoryError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            WHERE first_name = $1 AND last_name = $2
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        let mut rows = rows.into_iter();
        match (rows.next(), rows.next()) {
            (Some(row), None) => Ok(row.into()),
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
        // No row is not an error: delete is a no-op for unknown ids.
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        Ok(())
    }
}
