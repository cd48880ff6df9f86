//! Request handlers

pub mod employee;
pub mod health;
