//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL infrastructure for the employee
//! registry using SQLx: connection pool management, schema bootstrap, and the
//! repository adapter that implements the domain's persistence port.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. `domain_employee` defines the
//! [`domain_employee::EmployeeRepository`] port; [`PgEmployeeRepository`]
//! implements it here with explicit row structs mapped to and from the
//! domain entity. Queries are bound at runtime so the workspace builds
//! without a live database.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PgEmployeeRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/employees")).await?;
//! infra_db::bootstrap_schema(&pool).await?;
//! let repository = PgEmployeeRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::employee::PgEmployeeRepository;
pub use schema::bootstrap_schema;
