//! Fixed session-start roster: ten employees covering every department and role.

use crate::{Department, Employee, Role};

const SEED: [(&str, &str, &str, Department, Role); 10] = [
    ("Alice", "Smith", "alice@example.com", Department::HR, Role::Manager),
    ("Bob", "Johnson", "bob@example.com", Department::IT, Role::Developer),
    ("Charlie", "Lee", "charlie@example.com", Department::Finance, Role::Analyst),
    ("Diana", "Martinez", "diana@example.com", Department::Marketing, Role::Specialist),
    ("Edward", "Brown", "edward@example.com", Department::Sales, Role::Manager),
    ("Fiona", "Davis", "fiona@example.com", Department::Operations, Role::Coordinator),
    ("George", "Wilson", "george@example.com", Department::IT, Role::Developer),
    ("Hannah", "Taylor", "hannah@example.com", Department::HR, Role::Assistant),
    ("Ian", "Anderson", "ian@example.com", Department::Finance, Role::Manager),
    ("Julia", "Thomas", "julia@example.com", Department::Marketing, Role::Analyst),
];

/// Seed records with ids `"1"` through `"10"` in insertion order.
pub fn employees() -> Vec<Employee> {
    SEED.iter()
        .enumerate()
        .map(|(i, (first, last, email, department, role))| Employee {
            id: (i + 1).to_string(),
            first_name: (*first).to_string(),
            last_name: (*last).to_string(),
            email: (*email).to_string(),
            department: *department,
            role: *role,
        })
        .collect()
}
