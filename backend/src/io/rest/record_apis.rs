//! # REST API for Notes, Milestones and Appointments
//!
//! Plain child records without any deletion guard.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::io::rest::error::ApiError;
use crate::io::rest::extract::{ApiJson, ApiPath};
use crate::io::rest::mappers::record_mapper::RecordMapper;
use crate::AppState;
use shared::{
    CreateAppointmentRequest, CreateMilestoneRequest, CreateNoteRequest,
    UpdateAppointmentRequest, UpdateMilestoneRequest, UpdateNoteRequest,
};

pub fn note_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_note))
        .route("/:id", get(get_note).put(update_note).delete(delete_note))
}

pub fn milestone_router() -> Router<AppState> {
    Router::new().route("/", post(create_milestone)).route(
        "/:id",
        get(get_milestone)
            .put(update_milestone)
            .delete(delete_milestone),
    )
}

pub fn appointment_router() -> Router<AppState> {
    Router::new().route("/", post(create_appointment)).route(
        "/:id",
        get(get_appointment)
            .put(update_appointment)
            .delete(delete_appointment),
    )
}

// Notes

pub async fn create_note(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/notes - request: {:?}", request);

    let note = state
        .note_service
        .create(RecordMapper::note_to_domain(request))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordMapper::to_record_response(
            RecordMapper::note_to_dto(note),
            "Note added successfully!",
        )),
    ))
}

pub async fn get_note(
    State(state): State<AppState>,
    ApiPath(note_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/notes/{}", note_id);

    let note = state.note_service.get(note_id).await?;
    Ok(Json(RecordMapper::note_to_dto(note)))
}

pub async fn update_note(
    State(state): State<AppState>,
    ApiPath(note_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/notes/{} - request: {:?}", note_id, request);

    let note = state
        .note_service
        .update(note_id, RecordMapper::note_edit(request))
        .await?;

    Ok(Json(RecordMapper::to_record_response(
        RecordMapper::note_to_dto(note),
        "Note updated successfully.",
    )))
}

pub async fn delete_note(
    State(state): State<AppState>,
    ApiPath(note_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/notes/{}", note_id);

    let deleted = state.note_service.delete(note_id).await?;
    Ok(Json(RecordMapper::to_delete_response(
        deleted,
        "Note deleted successfully.",
    )))
}

// Milestones

pub async fn create_milestone(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateMilestoneRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/milestones - request: {:?}", request);

    let milestone = state
        .milestone_service
        .create(RecordMapper::milestone_to_domain(request))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordMapper::to_record_response(
            RecordMapper::milestone_to_dto(milestone),
            "Milestone added successfully!",
        )),
    ))
}

pub async fn get_milestone(
    State(state): State<AppState>,
    ApiPath(milestone_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/milestones/{}", milestone_id);

    let milestone = state.milestone_service.get(milestone_id).await?;
    Ok(Json(RecordMapper::milestone_to_dto(milestone)))
}

pub async fn update_milestone(
    State(state): State<AppState>,
    ApiPath(milestone_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateMilestoneRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/milestones/{} - request: {:?}", milestone_id, request);

    let milestone = state
        .milestone_service
        .update(milestone_id, RecordMapper::milestone_edit(request))
        .await?;

    Ok(Json(RecordMapper::to_record_response(
        RecordMapper::milestone_to_dto(milestone),
        "Milestone updated successfully.",
    )))
}

pub async fn delete_milestone(
    State(state): State<AppState>,
    ApiPath(milestone_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/milestones/{}", milestone_id);

    let deleted = state.milestone_service.delete(milestone_id).await?;
    Ok(Json(RecordMapper::to_delete_response(
        deleted,
        "Milestone deleted successfully.",
    )))
}

// Appointments

pub async fn create_appointment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/appointments - request: {:?}", request);

    let appointment = RecordMapper::appointment_to_domain(request)?;
    let appointment = state.appointment_service.create(appointment).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordMapper::to_record_response(
            RecordMapper::appointment_to_dto(appointment),
            "Appointment added successfully!",
        )),
    ))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    ApiPath(appointment_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/appointments/{}", appointment_id);

    let appointment = state.appointment_service.get(appointment_id).await?;
    Ok(Json(RecordMapper::appointment_to_dto(appointment)))
}

pub async fn update_appointment(
    State(state): State<AppState>,
    ApiPath(appointment_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateAppointmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!(
        "PUT /api/appointments/{} - request: {:?}",
        appointment_id, request
    );

    let command = RecordMapper::appointment_edit(request)?;
    let appointment = state
        .appointment_service
        .update(appointment_id, command)
        .await?;

    Ok(Json(RecordMapper::to_record_response(
        RecordMapper::appointment_to_dto(appointment),
        "Appointment updated successfully.",
    )))
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    ApiPath(appointment_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/appointments/{}", appointment_id);

    let deleted = state.appointment_service.delete(appointment_id).await?;
    Ok(Json(RecordMapper::to_delete_response(
        deleted,
        "Appointment deleted successfully.",
    )))
}
