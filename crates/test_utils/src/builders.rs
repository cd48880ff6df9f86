//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the fields they care about.

use uuid::Uuid;

use domain_employee::{Employee, NewEmployee};

/// Builder for constructing test employees
pub struct EmployeeBuilder {
    id: Option<Uuid>,
    first_name: String,
    last_name: String,
    email: String,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    /// Sets the employee id
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds an unpersisted [`NewEmployee`]
    pub fn build_new(self) -> NewEmployee {
        NewEmployee {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }

    /// Builds a persisted [`Employee`], generating an id when none was set
    pub fn build(self) -> Employee {
        Employee {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}
