//! Field rules for submitted data. Nothing is written when a rule fails.

use serde::Serialize;
use std::fmt;

use crate::domain::models::{Appointment, Milestone, Note, Symptom};

pub const CHILD_NAME_MAX_LEN: usize = 80;
pub const SYMPTOM_NAME_MAX_LEN: usize = 80;
pub const SYMPTOM_DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Per-field messages collected while checking a submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Messages recorded for one field
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a value against the field rules before it is persisted
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

pub(crate) fn check_child_fields(name: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let name = name.trim();
    if name.is_empty() {
        errors.add("name", "Name is required.");
    } else if name.chars().count() > CHILD_NAME_MAX_LEN {
        errors.add("name", "Name cannot be longer than 80 characters.");
    }
    errors.into_result()
}

pub(crate) fn check_symptom_fields(
    name: &str,
    description: Option<&str>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let name = name.trim();
    if name.is_empty() {
        errors.add("name", "Symptom name is required.");
    } else if name.chars().count() > SYMPTOM_NAME_MAX_LEN {
        errors.add("name", "Symptom name cannot be longer than 80 characters.");
    }
    if description.map_or(false, |d| d.chars().count() > SYMPTOM_DESCRIPTION_MAX_LEN) {
        errors.add("description", "Description cannot exceed 500 characters.");
    }
    errors.into_result()
}

impl Validate for Symptom {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_symptom_fields(&self.name, self.description.as_deref())
    }
}

impl Validate for Note {}
impl Validate for Milestone {}
impl Validate for Appointment {}
