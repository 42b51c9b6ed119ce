//! # REST API for Caregivers
//!
//! Caregiver CRUD and assignment of caregivers to children.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use tracing::info;

use crate::io::rest::error::ApiError;
use crate::io::rest::extract::{ApiJson, ApiPath};
use crate::io::rest::mappers::caregiver_mapper::CaregiverMapper;
use crate::io::rest::mappers::child_mapper::ChildMapper;
use crate::AppState;
use shared::CaregiverRequest;

/// Create a router for caregiver related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_caregivers).post(create_caregiver))
        .route(
            "/:id",
            get(get_caregiver)
                .put(update_caregiver)
                .delete(delete_caregiver),
        )
        .route("/:id/children", get(list_assigned_children))
        .route(
            "/:id/children/:child_id",
            put(assign_child).delete(unassign_child),
        )
}

pub async fn list_caregivers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/caregivers");

    let caregivers = state.caregiver_service.list_caregivers().await?;
    Ok(Json(CaregiverMapper::to_list_dto(caregivers)))
}

pub async fn create_caregiver(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CaregiverRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/caregivers - request: {:?}", request);

    let caregiver = state
        .caregiver_service
        .create_caregiver(CaregiverMapper::to_command(request))
        .await?;

    Ok((StatusCode::CREATED, Json(CaregiverMapper::to_dto(caregiver))))
}

pub async fn get_caregiver(
    State(state): State<AppState>,
    ApiPath(caregiver_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/caregivers/{}", caregiver_id);

    let caregiver = state.caregiver_service.get_caregiver(caregiver_id).await?;
    Ok(Json(CaregiverMapper::to_dto(caregiver)))
}

pub async fn update_caregiver(
    State(state): State<AppState>,
    ApiPath(caregiver_id): ApiPath<i64>,
    ApiJson(request): ApiJson<CaregiverRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/caregivers/{} - request: {:?}", caregiver_id, request);

    let caregiver = state
        .caregiver_service
        .update_caregiver(caregiver_id, CaregiverMapper::to_command(request))
        .await?;

    Ok(Json(CaregiverMapper::to_dto(caregiver)))
}

pub async fn delete_caregiver(
    State(state): State<AppState>,
    ApiPath(caregiver_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/caregivers/{}", caregiver_id);

    state.caregiver_service.delete_caregiver(caregiver_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Children assigned to the caregiver
pub async fn list_assigned_children(
    State(state): State<AppState>,
    ApiPath(caregiver_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/caregivers/{}/children", caregiver_id);

    let children = state.caregiver_service.children_of(caregiver_id).await?;
    Ok(Json(ChildMapper::to_child_list_dto(children)))
}

pub async fn assign_child(
    State(state): State<AppState>,
    ApiPath((caregiver_id, child_id)): ApiPath<(i64, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /api/caregivers/{}/children/{}", caregiver_id, child_id);

    let link = state.caregiver_service.assign(caregiver_id, child_id).await?;
    Ok(Json(CaregiverMapper::link_to_dto(link)))
}

pub async fn unassign_child(
    State(state): State<AppState>,
    ApiPath((caregiver_id, child_id)): ApiPath<(i64, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /api/caregivers/{}/children/{}", caregiver_id, child_id);

    state.caregiver_service.unassign(caregiver_id, child_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
