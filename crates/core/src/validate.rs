//! Form validation. Every rule runs; all violations are reported together.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Department, EmployeeFormData, Role};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Department => "department",
            FormField::Role => "role",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Field → message mapping, in form order. At most one entry per field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", joined(.errors))]
pub struct ValidationErrors {
    errors: SmallVec<[FieldError; 5]>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool { self.errors.is_empty() }
    pub fn len(&self) -> usize { self.errors.len() }

    pub fn contains(&self, field: FormField) -> bool { self.get(field).is_some() }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> { self.errors.iter() }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ { self.errors.iter().map(|e| e.field) }

    fn push(&mut self, field: FormField, message: impl Into<String>) {
        if !self.contains(field) {
            self.errors.push(FieldError { field, message: message.into() });
        }
    }
}

fn joined(errors: &[FieldError]) -> String {
    errors.iter().map(|e| format!("{}: {}", e.field, e.message)).collect::<Vec<_>>().join("; ")
}

/// Typed, checked content of a form. The only way to obtain one is `validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

pub fn validate(data: &EmployeeFormData) -> Result<EmployeeFields, ValidationErrors> {
    let mut errs = ValidationErrors::default();

    if data.first_name.trim().is_empty() {
        errs.push(FormField::FirstName, "First name is required");
    }
    if data.last_name.trim().is_empty() {
        errs.push(FormField::LastName, "Last name is required");
    }
    if data.email.trim().is_empty() {
        errs.push(FormField::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&data.email) {
        errs.push(FormField::Email, "Invalid email format");
    }

    let department = parse_choice::<Department>(&data.department, FormField::Department, "Department", &mut errs);
    let role = parse_choice::<Role>(&data.role, FormField::Role, "Role", &mut errs);

    match (department, role) {
        (Some(department), Some(role)) if errs.is_empty() => Ok(EmployeeFields {
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            department,
            role,
        }),
        _ => Err(errs),
    }
}

fn parse_choice<T: std::str::FromStr>(
    raw: &str,
    field: FormField,
    label: &str,
    errs: &mut ValidationErrors,
) -> Option<T> {
    if raw.trim().is_empty() {
        errs.push(field, format!("{label} is required"));
        return None;
    }
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            errs.push(field, format!("Unknown {}: {raw}", label.to_lowercase()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first: &str, last: &str, email: &str) -> EmployeeFormData {
        EmployeeFormData::new(first, last, email, Department::Sales, Role::Assistant)
    }

    #[test]
    fn accepts_well_formed_data() {
        let ok = validate(&form("Kim", "Park", "kim@corp.io")).unwrap();
        assert_eq!(ok.department, Department::Sales);
        assert_eq!(ok.role, Role::Assistant);
        assert_eq!(ok.first_name, "Kim");
    }

    #[test]
    fn collects_every_violation() {
        let errs = validate(&form("", "   ", "bad@")).unwrap_err();
        assert_eq!(errs.len(), 3);
        assert_eq!(errs.get(FormField::FirstName), Some("First name is required"));
        assert_eq!(errs.get(FormField::LastName), Some("Last name is required"));
        assert_eq!(errs.get(FormField::Email), Some("Invalid email format"));
        assert!(!errs.contains(FormField::Department));
    }

    #[test]
    fn email_shapes() {
        for bad in ["plain", "a@b", "a b@c.d", "@c.d", "a@.d"] {
            let errs = validate(&form("A", "B", bad)).unwrap_err();
            assert!(errs.contains(FormField::Email), "{bad} should be rejected");
        }
        let errs = validate(&form("A", "B", "  ")).unwrap_err();
        assert_eq!(errs.get(FormField::Email), Some("Email is required"));
        assert!(validate(&form("A", "B", "x.y@sub.example.org")).is_ok());
    }

    #[test]
    fn closed_sets_are_enforced() {
        let mut f = form("A", "B", "a@b.co");
        f.department = String::new();
        f.role = "Janitor".into();
        let errs = validate(&f).unwrap_err();
        assert_eq!(errs.get(FormField::Department), Some("Department is required"));
        assert_eq!(errs.get(FormField::Role), Some("Unknown role: Janitor"));
        assert_eq!(errs.fields().collect::<Vec<_>>(), vec![FormField::Department, FormField::Role]);
    }

    #[test]
    fn serializes_as_field_list() {
        let errs = validate(&form("", "B", "b@c.de")).unwrap_err();
        let v = serde_json::to_value(&errs).unwrap();
        assert_eq!(v[0]["field"], "firstName");
        assert_eq!(errs.to_string(), "firstName: First name is required");
    }

    #[test]
    fn display_joins_every_field_in_form_order() {
        let errs = validate(&form(" ", "B", "bad@")).unwrap_err();
        assert_eq!(errs.to_string(), "firstName: First name is required; email: Invalid email format");
        let boxed: Box<dyn std::error::Error> = Box::new(errs);
        assert!(boxed.source().is_none());
    }
}
