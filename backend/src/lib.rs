//! # Medical Journey Backend
//!
//! Record keeping for caregivers tracking a child's medical history: child
//! profiles, symptoms, notes, milestones, appointments and caregiver
//! assignments.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (services, guarded deletion, validation)
//!     ↓
//! Storage Layer (SQLite, generic repository)
//! ```
//!
//! A child cannot be deleted while it still has symptom records; the check
//! runs once for the confirmation and again when the delete is submitted.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::models::{Appointment, Milestone, Note, Symptom};
use crate::domain::{CaregiverService, ChildService, DeletionService, RecordService};
use crate::io::rest::{caregiver_apis, child_apis, record_apis, symptom_apis};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub child_service: ChildService,
    pub deletion_service: DeletionService,
    pub symptom_service: RecordService<Symptom>,
    pub note_service: RecordService<Note>,
    pub milestone_service: RecordService<Milestone>,
    pub appointment_service: RecordService<Appointment>,
    pub caregiver_service: CaregiverService,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            child_service: ChildService::new(db.clone()),
            deletion_service: DeletionService::new(db.clone()),
            symptom_service: RecordService::new(db.clone()),
            note_service: RecordService::new(db.clone()),
            milestone_service: RecordService::new(db.clone()),
            appointment_service: RecordService::new(db.clone()),
            caregiver_service: CaregiverService::new(db),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::new(&config.database_url, config.max_connections).await?;

    info!("Setting up domain model");
    Ok(AppState::new(db_conn))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", config.cors_origin))?;

    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/children", child_apis::router())
        .nest("/symptoms", symptom_apis::router())
        .nest("/notes", record_apis::note_router())
        .nest("/milestones", record_apis::milestone_router())
        .nest("/appointments", record_apis::appointment_router())
        .nest("/caregivers", caregiver_apis::router());

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}
