//! REST surface tests
//!
//! Exercises every employee endpoint over `axum_test::TestServer` with the
//! in-memory repository adapter, so no database is required.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

use interface_api::{config::ApiConfig, create_router_with_repository};
use test_utils::{EmployeeBuilder, InMemoryEmployeeRepository};

fn server() -> TestServer {
    server_with(InMemoryEmployeeRepository::new())
}

fn server_with(repository: InMemoryEmployeeRepository) -> TestServer {
    let app = create_router_with_repository(Arc::new(repository), ApiConfig::default());
    TestServer::new(app).expect("failed to start test server")
}

fn ada_payload() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com"
    })
}

// ============================================================================
// POST /api/employees
// ============================================================================

#[tokio::test]
async fn test_create_employee_returns_201_with_generated_id() {
    let server = server();

    let response = server.post("/api/employees").json(&ada_payload()).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], "Lovelace");
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn test_create_employee_with_duplicate_email_returns_409() {
    let server = server();
    server.post("/api/employees").json(&ada_payload()).await;

    let response = server
        .post("/api/employees")
        .json(&json!({
            "firstName": "Augusta",
            "lastName": "King",
            "email": "ada@example.com"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "conflict");
    assert!(body["message"].as_str().unwrap().contains("ada@example.com"));
}

// ============================================================================
// GET /api/employees
// ============================================================================

#[tokio::test]
async fn test_list_employees_on_empty_store_returns_empty_array() {
    let server = server();

    let response = server.get("/api/employees").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_employees_returns_all_saved() {
    let repository = InMemoryEmployeeRepository::with_employees([
        EmployeeBuilder::new().build(),
        EmployeeBuilder::new()
            .with_first_name("Grace")
            .with_last_name("Hopper")
            .with_email("grace@example.com")
            .build(),
    ]);
    let server = server_with(repository);

    let response = server.get("/api/employees").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// ============================================================================
// GET /api/employees/{id}
// ============================================================================

#[tokio::test]
async fn test_get_employee_by_id_returns_200() {
    let employee = EmployeeBuilder::new().build();
    let server = server_with(InMemoryEmployeeRepository::with_employees([
        employee.clone()
    ]));

    let response = server.get(&format!("/api/employees/{}", employee.id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], employee.id.to_string());
    assert_eq!(body["firstName"], "Ada");
}

#[tokio::test]
async fn test_get_employee_by_unknown_id_returns_404_empty_body() {
    let server = server();

    let response = server.get(&format!("/api/employees/{}", Uuid::new_v4())).await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().is_empty());
}

// ============================================================================
// PUT /api/employees/{id}
// ============================================================================

#[tokio::test]
async fn test_update_employee_overwrites_fields_and_keeps_id() {
    let employee = EmployeeBuilder::new().build();
    let server = server_with(InMemoryEmployeeRepository::with_employees([
        employee.clone()
    ]));

    let response = server
        .put(&format!("/api/employees/{}", employee.id))
        .json(&json!({
            "firstName": "Ada",
            "lastName": "King",
            "email": "countess@example.com"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], employee.id.to_string());
    assert_eq!(body["lastName"], "King");
    assert_eq!(body["email"], "countess@example.com");

    // The change is visible on a subsequent read.
    let readback = server.get(&format!("/api/employees/{}", employee.id)).await;
    let body: Value = readback.json();
    assert_eq!(body["email"], "countess@example.com");
}

#[tokio::test]
async fn test_update_employee_with_unknown_id_returns_404() {
    let server = server();

    let response = server
        .put(&format!("/api/employees/{}", Uuid::new_v4()))
        .json(&ada_payload())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().is_empty());
}

// ============================================================================
// DELETE /api/employees/{id}
// ============================================================================

#[tokio::test]
async fn test_delete_employee_returns_200_and_removes_row() {
    let employee = EmployeeBuilder::new().build();
    let server = server_with(InMemoryEmployeeRepository::with_employees([
        employee.clone()
    ]));

    let response = server
        .delete(&format!("/api/employees/{}", employee.id))
        .await;
    response.assert_status_ok();

    let readback = server.get(&format!("/api/employees/{}", employee.id)).await;
    readback.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_employee_still_returns_200() {
    let server = server();

    let response = server
        .delete(&format!("/api/employees/{}", Uuid::new_v4()))
        .await;

    response.assert_status_ok();
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}
