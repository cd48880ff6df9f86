//! Employee Domain Layer
//!
//! This crate contains the Employee entity, the repository port that the
//! infrastructure layer implements, and the domain service that enforces the
//! single business rule of the system: an email address may be used by at most
//! one employee, checked before insert.
//!
//! # Architecture
//!
//! The domain layer has no knowledge of HTTP or SQL. It talks to storage only
//! through the [`ports::EmployeeRepository`] trait, which is implemented by
//! the `infra_db` crate for PostgreSQL and by an in-memory mock in
//! `test_utils` for tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_employee::{EmployeeService, NewEmployee};
//! use std::sync::Arc;
//!
//! let service = EmployeeService::new(Arc::new(repository));
//! let employee = service.save_employee(NewEmployee {
//!     first_name: "Ada".into(),
//!     last_name: "Lovelace".into(),
//!     email: "ada@example.com".into(),
//! }).await?;
//! ```

pub mod employee;
pub mod error;
pub mod ports;
pub mod service;

pub use employee::{Employee, NewEmployee};
pub use error::{EmployeeError, RepositoryError};
pub use ports::EmployeeRepository;
pub use service::EmployeeService;
