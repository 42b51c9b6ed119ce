//! # REST API for Symptom Logging
//!
//! Deleting a symptom never needs a guard; the response carries the owning
//! child's id so the caller can return to that child.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::domain::models::DeletedRecord;
use crate::io::rest::error::ApiError;
use crate::io::rest::extract::{ApiJson, ApiPath};
use crate::io::rest::mappers::record_mapper::RecordMapper;
use crate::io::rest::mappers::symptom_mapper::SymptomMapper;
use crate::AppState;
use shared::{LogSymptomRequest, UpdateSymptomRequest};

pub const SYMPTOM_LOGGED: &str = "Symptom logged successfully!";
pub const SYMPTOM_UPDATED: &str = "Symptom updated successfully.";
pub const SYMPTOM_DELETED: &str = "Symptom deleted successfully.";

/// Create a router for symptom related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(log_symptom))
        .route(
            "/:id",
            get(get_symptom).put(update_symptom).delete(delete_symptom),
        )
}

/// Log a symptom for a child
pub async fn log_symptom(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LogSymptomRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/symptoms - request: {:?}", request);

    let now = chrono::Local::now().naive_local();
    let symptom = SymptomMapper::to_domain(request, now)?;
    let symptom = state.symptom_service.create(symptom).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordMapper::to_record_response(
            SymptomMapper::to_dto(symptom),
            SYMPTOM_LOGGED,
        )),
    ))
}

pub async fn get_symptom(
    State(state): State<AppState>,
    ApiPath(symptom_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/symptoms/{}", symptom_id);

    let symptom = state.symptom_service.get(symptom_id).await?;
    Ok(Json(SymptomMapper::to_dto(symptom)))
}

/// Overwrite a symptom's name, description and log time
pub async fn update_symptom(
    State(state): State<AppState>,
    ApiPath(symptom_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateSymptomRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/symptoms/{} - request: {:?}", symptom_id, request);

    let command = SymptomMapper::to_edit_command(request)?;
    let symptom = state.symptom_service.update(symptom_id, command).await?;

    Ok(Json(RecordMapper::to_record_response(
        SymptomMapper::to_dto(symptom),
        SYMPTOM_UPDATED,
    )))
}

pub async fn delete_symptom(
    State(state): State<AppState>,
    ApiPath(symptom_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/symptoms/{}", symptom_id);

    let deleted = state.deletion_service.delete_symptom(symptom_id).await?;
    let deleted = DeletedRecord {
        id: deleted.symptom_id,
        child_id: deleted.child_id,
    };

    Ok(Json(RecordMapper::to_delete_response(deleted, SYMPTOM_DELETED)))
}
