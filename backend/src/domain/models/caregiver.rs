use sqlx::FromRow;

/// A parent, guardian or other caregiver
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Caregiver {
    pub id: i64,
    pub full_name: Option<String>,
}

impl Caregiver {
    pub fn new(full_name: Option<String>) -> Self {
        Self { id: 0, full_name }
    }
}

/// Join record assigning a caregiver to a child
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CaregiverChild {
    pub id: i64,
    pub caregiver_id: i64,
    pub child_id: i64,
}

impl CaregiverChild {
    pub fn new(caregiver_id: i64, child_id: i64) -> Self {
        Self {
            id: 0,
            caregiver_id,
            child_id,
        }
    }
}
