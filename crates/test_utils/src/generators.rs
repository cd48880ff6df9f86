//! Randomized Test Data Generators
//!
//! Provides `fake`-backed generation of employee data for tests that need
//! many distinct records. Emails carry a uuid suffix so generated employees
//! never collide on the service-layer uniqueness check, even across tests
//! sharing a database container.

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use uuid::Uuid;

use domain_employee::NewEmployee;

/// Generates a random employee with a collision-free email
pub fn random_employee() -> NewEmployee {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let email = format!(
        "{}.{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        Uuid::new_v4().simple()
    );
    NewEmployee {
        first_name,
        last_name,
        email,
    }
}

/// Generates `count` random employees
pub fn random_employees(count: usize) -> Vec<NewEmployee> {
    (0..count).map(|_| random_employee()).collect()
}
