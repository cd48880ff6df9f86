//! Employee DTOs
//!
//! The wire shape is camelCase JSON:
//! `{ "id": ..., "firstName": ..., "lastName": ..., "email": ... }`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_employee::{Employee, NewEmployee};

/// Payload for creating or replacing an employee
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(request: EmployeeRequest) -> Self {
        NewEmployee {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
        }
    }
}

/// A persisted employee as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeResponse {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
        }
    }
}
