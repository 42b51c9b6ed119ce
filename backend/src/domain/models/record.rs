//! Notes, milestones and appointments: plain records hanging off a child.

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A caregiver's free-form note about a child
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Note {
    pub id: i64,
    pub content: Option<String>,
    pub child_id: i64,
}

impl Note {
    pub fn new(child_id: i64, content: Option<String>) -> Self {
        Self {
            id: 0,
            content,
            child_id,
        }
    }
}

/// A developmental or treatment milestone
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Milestone {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub child_id: i64,
}

impl Milestone {
    pub fn new(child_id: i64, title: Option<String>, description: Option<String>) -> Self {
        Self {
            id: 0,
            title,
            description,
            child_id,
        }
    }
}

/// A scheduled medical appointment
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub location: Option<String>,
    pub doctor: Option<String>,
    pub date: NaiveDateTime,
    pub child_id: i64,
}

impl Appointment {
    pub fn new(
        child_id: i64,
        location: Option<String>,
        doctor: Option<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: 0,
            location,
            doctor,
            date,
            child_id,
        }
    }
}

/// Identifies a removed record and the child it belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedRecord {
    pub id: i64,
    pub child_id: i64,
}
