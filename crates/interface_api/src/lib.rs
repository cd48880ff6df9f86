//! HTTP API Layer
//!
//! This crate provides the REST API for the employee registry using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for employees and health checks
//! - **DTOs**: Request/Response data transfer objects (camelCase JSON)
//! - **Error Handling**: Consistent error responses; unknown ids answer 404
//!   with an empty body, duplicate emails answer 409
//!
//! All wiring is explicit: the repository adapter is constructed at startup,
//! injected into the domain service, and the service into the router state.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(pool, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_employee::{EmployeeRepository, EmployeeService};
use infra_db::PgEmployeeRepository;

use crate::config::ApiConfig;
use crate::handlers::{employee, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: EmployeeService,
    /// Present when the service is backed by Postgres; used by readiness
    pub pool: Option<PgPool>,
    pub config: ApiConfig,
}

/// Creates the main API router backed by PostgreSQL
///
/// Builds the repository adapter from the pool, injects it into the domain
/// service, and wires the service into the router.
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let service = EmployeeService::new(Arc::new(PgEmployeeRepository::new(pool.clone())));
    router_with_state(AppState {
        service,
        pool: Some(pool),
        config,
    })
}

/// Creates the API router over an already-constructed repository adapter.
///
/// Used by tests to serve the REST surface over the in-memory mock.
pub fn create_router_with_repository(
    repository: Arc<dyn EmployeeRepository>,
    config: ApiConfig,
) -> Router {
    router_with_state(AppState {
        service: EmployeeService::new(repository),
        pool: None,
        config,
    })
}

fn router_with_state(state: AppState) -> Router {
    // Public routes (no state-dependent checks)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Employee routes
    let employee_routes = Router::new()
        .route(
            "/",
            post(employee::create_employee).get(employee::list_employees),
        )
        .route(
            "/:id",
            get(employee::get_employee)
                .put(employee::update_employee)
                .delete(employee::delete_employee),
        );

    Router::new()
        .merge(public_routes)
        .nest("/api/employees", employee_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
