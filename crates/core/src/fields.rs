//! Sortable fields of an employee record.
//!
//! This module provides:
//! - The closed set of sort fields with their wire names and headings
//! - A typed accessor per field so sorting never looks fields up by name

#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Employee, UnknownValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl SortField {
    /// Display order of the sort controls.
    pub const ALL: [SortField; 5] = [
        SortField::FirstName,
        SortField::LastName,
        SortField::Email,
        SortField::Department,
        SortField::Role,
    ];

    /// Wire name, matching the serialized record field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::FirstName => "firstName",
            SortField::LastName => "lastName",
            SortField::Email => "email",
            SortField::Department => "department",
            SortField::Role => "role",
        }
    }

    /// Human heading for a sort control.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::FirstName => "First Name",
            SortField::LastName => "Last Name",
            SortField::Email => "Email",
            SortField::Department => "Department",
            SortField::Role => "Role",
        }
    }

    /// The string this field sorts on.
    pub fn key<'a>(&self, e: &'a Employee) -> &'a str {
        match self {
            SortField::FirstName => &e.first_name,
            SortField::LastName => &e.last_name,
            SortField::Email => &e.email,
            SortField::Department => e.department.as_str(),
            SortField::Role => e.role.as_str(),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for SortField {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownValue { kind: "sort field", value: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}
