//! Repository implementations
//!
//! Each repository implements a domain persistence port against PostgreSQL.

pub mod employee;
