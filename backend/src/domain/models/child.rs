use chrono::NaiveDate;
use sqlx::FromRow;

use super::{Appointment, Caregiver, Milestone, Note, Symptom};

/// A child whose medical history is being tracked
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Child {
    pub id: i64,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
}

impl Child {
    /// Build a child that has not been stored yet; the id is assigned on insert
    pub fn new(name: impl Into<String>, date_of_birth: Option<NaiveDate>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            date_of_birth,
        }
    }
}

/// A child loaded together with its symptom collection
#[derive(Debug, Clone, PartialEq)]
pub struct ChildWithSymptoms {
    pub child: Child,
    pub symptoms: Vec<Symptom>,
}

impl ChildWithSymptoms {
    pub fn has_symptoms(&self) -> bool {
        !self.symptoms.is_empty()
    }
}

/// Everything recorded for one child
#[derive(Debug, Clone, PartialEq)]
pub struct ChildProfile {
    pub child: Child,
    pub symptoms: Vec<Symptom>,
    pub notes: Vec<Note>,
    pub milestones: Vec<Milestone>,
    pub appointments: Vec<Appointment>,
    pub caregivers: Vec<Caregiver>,
}
