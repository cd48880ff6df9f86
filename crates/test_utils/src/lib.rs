//! Test Utilities
//!
//! Shared helpers for the employee registry test suite:
//!
//! - [`database`]: testcontainers-backed PostgreSQL instances for
//!   integration tests
//! - [`mock`]: an in-memory implementation of the employee repository port
//!   for tests that do not need a real database
//! - [`builders`]: builder-pattern construction of test employees
//! - [`generators`]: randomized employee data via the `fake` crate

pub mod builders;
pub mod database;
pub mod generators;
pub mod mock;

pub use builders::EmployeeBuilder;
pub use database::{get_shared_test_database, TestDatabase};
pub use mock::InMemoryEmployeeRepository;
