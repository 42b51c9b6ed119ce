use serde::{Deserialize, Serialize};

/// Child profile as sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: i64,
    /// Full name of the child (max 80 characters)
    pub name: String,
    /// Date of birth in YYYY-MM-DD format
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: i64,
    pub child_id: i64,
    /// Short label such as "Fever" (max 80 characters)
    pub name: String,
    /// Optional detail (max 500 characters)
    pub description: Option<String>,
    /// When the symptom was logged (YYYY-MM-DDTHH:MM:SS, local time)
    pub date_logged: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub child_id: i64,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: i64,
    pub child_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub child_id: i64,
    pub location: Option<String>,
    pub doctor: Option<String>,
    /// Appointment date and time (YYYY-MM-DDTHH:MM:SS)
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caregiver {
    pub id: i64,
    pub full_name: Option<String>,
}

/// Assignment of a caregiver to a child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaregiverChild {
    pub id: i64,
    pub caregiver_id: i64,
    pub child_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChildRequest {
    pub name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

/// Overwrites every editable field of the child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateChildRequest {
    pub name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildResponse {
    pub child: Child,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildListResponse {
    pub children: Vec<Child>,
}

/// Everything recorded for one child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildDetailsResponse {
    pub child: Child,
    pub symptoms: Vec<Symptom>,
    pub notes: Vec<Note>,
    pub milestones: Vec<Milestone>,
    pub appointments: Vec<Appointment>,
    pub caregivers: Vec<Caregiver>,
}

/// A child with its symptom log, as listed on the overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildOverview {
    pub child: Child,
    pub symptoms: Vec<Symptom>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildOverviewResponse {
    pub children: Vec<ChildOverview>,
}

/// Answer to "may this child be deleted right now?"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletionCheckResponse {
    pub child: Child,
    pub symptom_count: usize,
    pub can_delete: bool,
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteChildResponse {
    pub child_id: i64,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSymptomRequest {
    pub child_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to the current time when omitted
    #[serde(default)]
    pub date_logged: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSymptomRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date_logged: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub child_id: i64,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMilestoneRequest {
    pub child_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMilestoneRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub child_id: i64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub doctor: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub doctor: Option<String>,
    pub date: String,
}

/// Create or overwrite a caregiver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaregiverRequest {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaregiverListResponse {
    pub caregivers: Vec<Caregiver>,
}

/// A single child record together with a user-facing confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse<T> {
    pub record: T,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordListResponse<T> {
    pub records: Vec<T>,
}

/// Returned after removing a record that belongs to a child, so the caller
/// can navigate back to the owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteRecordResponse {
    pub id: i64,
    pub child_id: i64,
    pub success_message: String,
}
