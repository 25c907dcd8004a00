//! Roster core types: the employee record, its closed value sets, and the
//! form payload the presentation layer hands to the store.

#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod fields;
pub mod params;
pub mod seed;
pub mod validate;

pub use fields::{SortDirection, SortField};
pub use params::{Facet, FilterCriteria, PageSettings, QueryParameters, SortOptions};
pub use validate::{validate, EmployeeFields, FieldError, FormField, ValidationErrors};

/// Stable record identifier. Assigned by the store, never reused in a session.
pub type EmployeeId = String;

/// A value outside one of the closed sets (department, role, sort field).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    IT,
    HR,
    Finance,
    Marketing,
    Sales,
    Operations,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::IT,
        Department::HR,
        Department::Finance,
        Department::Marketing,
        Department::Sales,
        Department::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::IT => "IT",
            Department::HR => "HR",
            Department::Finance => "Finance",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Department {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownValue { kind: "department", value: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Developer,
    Analyst,
    Coordinator,
    Specialist,
    Assistant,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Manager,
        Role::Developer,
        Role::Analyst,
        Role::Coordinator,
        Role::Specialist,
        Role::Assistant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Developer => "Developer",
            Role::Analyst => "Analyst",
            Role::Coordinator => "Coordinator",
            Role::Specialist => "Specialist",
            Role::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Role {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownValue { kind: "role", value: s.to_string() })
    }
}

/// One directory member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

impl Employee {
    /// Build a record from already-validated fields.
    pub fn from_fields(id: EmployeeId, f: EmployeeFields) -> Self {
        Self {
            id,
            first_name: f.first_name,
            last_name: f.last_name,
            email: f.email,
            department: f.department,
            role: f.role,
        }
    }

    /// Replace every field except `id`.
    pub fn assign(&mut self, f: EmployeeFields) {
        self.first_name = f.first_name;
        self.last_name = f.last_name;
        self.email = f.email;
        self.department = f.department;
        self.role = f.role;
    }

    pub fn full_name(&self) -> String { format!("{} {}", self.first_name, self.last_name) }
}

/// Unvalidated create/edit payload as typed by the user.
///
/// Department and role arrive as raw names so that a bad value can be
/// reported per field instead of failing to deserialize the whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl EmployeeFormData {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: Department,
        role: Role,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department: department.as_str().to_string(),
            role: role.as_str().to_string(),
        }
    }
}

/// Blank form for a new record: empty text fields, IT / Developer preselected.
impl Default for EmployeeFormData {
    fn default() -> Self {
        Self::new("", "", "", Department::IT, Role::Developer)
    }
}

/// Edit pre-fill.
impl From<&Employee> for EmployeeFormData {
    fn from(e: &Employee) -> Self {
        Self::new(e.first_name.clone(), e.last_name.clone(), e.email.clone(), e.department, e.role)
    }
}

pub mod prelude {
    pub use super::{
        Department, Employee, EmployeeFormData, EmployeeId, Facet, FilterCriteria, PageSettings,
        QueryParameters, Role, SortDirection, SortField, SortOptions, ValidationErrors,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_sets_parse_their_own_names() {
        for d in Department::ALL {
            assert_eq!(d.as_str().parse::<Department>().unwrap(), d);
        }
        for r in Role::ALL {
            assert_eq!(r.to_string().parse::<Role>().unwrap(), r);
        }
        let err = "Legal".parse::<Department>().unwrap_err();
        assert_eq!(err.kind, "department");
        assert!("manager".parse::<Role>().is_err(), "names are case-sensitive");
    }

    #[test]
    fn employee_serializes_camel_case() {
        let e = Employee {
            id: "1".into(),
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            email: "alice@example.com".into(),
            department: Department::HR,
            role: Role::Manager,
        };
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["firstName"], "Alice");
        assert_eq!(v["department"], "HR");
        assert_eq!(v["role"], "Manager");
    }

    #[test]
    fn form_defaults_and_prefill() {
        let blank = EmployeeFormData::default();
        assert!(blank.first_name.is_empty());
        assert_eq!(blank.department, "IT");
        assert_eq!(blank.role, "Developer");

        let e = &seed::employees()[0];
        let form = EmployeeFormData::from(e);
        assert_eq!(form.first_name, "Alice");
        assert_eq!(form.department, "HR");
        assert_eq!(e.full_name(), "Alice Smith");
    }
}
