use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A symptom logged for a child by a caregiver
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Symptom {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date_logged: NaiveDateTime,
    pub child_id: i64,
}

impl Symptom {
    pub fn new(
        child_id: i64,
        name: impl Into<String>,
        description: Option<String>,
        date_logged: NaiveDateTime,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description,
            date_logged,
            child_id,
        }
    }
}

/// Identifies a removed symptom and the child it belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedSymptom {
    pub symptom_id: i64,
    pub child_id: i64,
}
