//! # REST API for Child Management
//!
//! Endpoints for creating, retrieving, updating and deleting children, plus
//! the per-child record listings. Deletion goes through the guarded deletion
//! service: `GET /:id/deletion-check` answers whether a delete would be
//! refused, `DELETE /:id` checks again before removing anything.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::info;

use crate::io::rest::error::ApiError;
use crate::io::rest::extract::{ApiJson, ApiPath};
use crate::io::rest::mappers::caregiver_mapper::CaregiverMapper;
use crate::io::rest::mappers::child_mapper::ChildMapper;
use crate::io::rest::mappers::record_mapper::RecordMapper;
use crate::io::rest::mappers::symptom_mapper::SymptomMapper;
use crate::AppState;
use shared::{CreateChildRequest, UpdateChildRequest};

pub const CHILD_ADDED: &str = "Child added successfully!";
pub const CHILD_UPDATED: &str = "Child updated successfully.";
pub const CHILD_DELETED: &str = "Child deleted successfully.";

/// Create a router for child related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_children).post(create_child))
        .route("/overview", get(list_children_with_symptoms))
        .route(
            "/:id",
            get(get_child_details).put(update_child).delete(delete_child),
        )
        .route("/:id/deletion-check", get(check_child_deletable))
        .route("/:id/symptoms", get(list_child_symptoms))
        .route("/:id/notes", get(list_child_notes))
        .route("/:id/milestones", get(list_child_milestones))
        .route("/:id/appointments", get(list_child_appointments))
        .route("/:id/caregivers", get(list_child_caregivers))
}

/// List all children
pub async fn list_children(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children");

    let children = state.child_service.list_children().await?;
    Ok(Json(ChildMapper::to_child_list_dto(children)))
}

/// List all children, each with its symptom log
pub async fn list_children_with_symptoms(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/overview");

    let loaded = state.child_service.list_children_with_symptoms().await?;
    Ok(Json(ChildMapper::to_overview_dto(loaded)))
}

/// Create a new child
pub async fn create_child(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateChildRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/children - request: {:?}", request);

    let command = ChildMapper::to_create_command(request)?;
    let child = state.child_service.create_child(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ChildMapper::to_child_response(child, CHILD_ADDED)),
    ))
}

/// Get a child with all of its records
pub async fn get_child_details(
    State(state): State<AppState>,
    ApiPath(child_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}", child_id);

    let profile = state.child_service.get_child_profile(child_id).await?;
    Ok(Json(ChildMapper::to_details_dto(profile)))
}

/// Overwrite a child's name and date of birth
pub async fn update_child(
    State(state): State<AppState>,
    ApiPath(child_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateChildRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/children/{} - request: {:?}", child_id, request);

    let command = ChildMapper::to_update_command(request)?;
    let child = state.child_service.update_child(child_id, command).await?;

    Ok(Json(ChildMapper::to_child_response(child, CHILD_UPDATED)))
}

/// Report whether the child can be deleted, without changing anything
pub async fn check_child_deletable(
    State(state): State<AppState>,
    ApiPath(child_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}/deletion-check", child_id);

    let check = state.deletion_service.check_child_deletable(child_id).await?;
    Ok(Json(ChildMapper::to_deletion_check_dto(check)))
}

/// Delete a child that has no symptoms
pub async fn delete_child(
    State(state): State<AppState>,
    ApiPath(child_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/children/{}", child_id);

    let deleted = state.deletion_service.delete_child(child_id).await?;
    Ok(Json(ChildMapper::to_delete_response(deleted, CHILD_DELETED)))
}

pub async fn list_child_symptoms(
    State(state): State<AppState>,
    ApiPath(child_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}/symptoms", child_id);

    let symptoms = state.symptom_service.list_for_child(child_id).await?;
    Ok(Json(RecordMapper::to_record_list(symptoms, SymptomMapper::to_dto)))
}

pub async fn list_child_notes(
    State(state): State<AppState>,
    ApiPath(child_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}/notes", child_id);

    let notes = state.note_service.list_for_child(child_id).await?;
    Ok(Json(RecordMapper::to_record_list(notes, RecordMapper::note_to_dto)))
}

pub async fn list_child_milestones(
    State(state): State<AppState>,
    ApiPath(child_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}/milestones", child_id);

    let milestones = state.milestone_service.list_for_child(child_id).await?;
    Ok(Json(RecordMapper::to_record_list(
        milestones,
        RecordMapper::milestone_to_dto,
    )))
}

pub async fn list_child_appointments(
    State(state): State<AppState>,
    ApiPath(child_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}/appointments", child_id);

    let appointments = state.appointment_service.list_for_child(child_id).await?;
    Ok(Json(RecordMapper::to_record_list(
        appointments,
        RecordMapper::appointment_to_dto,
    )))
}

/// Caregivers assigned to the child
pub async fn list_child_caregivers(
    State(state): State<AppState>,
    ApiPath(child_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}/caregivers", child_id);

    let caregivers = state.caregiver_service.caregivers_of(child_id).await?;
    Ok(Json(CaregiverMapper::to_list_dto(caregivers)))
}
