//! Employee entity
//!
//! The Employee is the sole aggregate of this system: a person record with a
//! store-generated identifier, first name, last name, and email address.
//! [`NewEmployee`] is the identity-less creation payload; the record store
//! assigns the id on insert.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted employee record.
///
/// Every persisted employee has a non-null id, first name, last name, and
/// email. The id is generated by the record store at creation time and is
/// immutable thereafter; all single-record operations key on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-generated unique identifier
    pub id: Uuid,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address, intended unique across all employees
    pub email: String,
}

impl Employee {
    /// Returns the employee's display name ("First Last")
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replaces the mutable fields from another payload, keeping the id.
    ///
    /// Used by the update path: the caller looks up the existing record,
    /// overwrites first name, last name, and email, and saves the result.
    pub fn apply(&mut self, update: NewEmployee) {
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.email = update.email;
    }
}

/// An employee that has not been persisted yet.
///
/// Carries no identifier; the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewEmployee {
    /// Creates a new unpersisted employee
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Promotes this payload to a persisted [`Employee`] with the given id.
    pub fn with_id(self, id: Uuid) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}
