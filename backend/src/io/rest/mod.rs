//! # REST API Interface Layer
//!
//! HTTP endpoints for the medical journey log. Handlers translate JSON
//! requests into domain commands, call a service and translate the result or
//! the error back. No business rules live here.
//!
//! Every failure is answered with the same body shape:
//! `{"error": {"code", "message", "fields"?}}`.

pub mod caregiver_apis;
pub mod child_apis;
pub mod error;
pub mod extract;
pub mod mappers;
pub mod record_apis;
pub mod symptom_apis;

pub use error::ApiError;
pub use extract::{ApiJson, ApiPath};
