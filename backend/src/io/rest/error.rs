//! API error types with structured JSON responses.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::validation::{FieldError, ValidationErrors};
use crate::domain::ServiceError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    DeleteBlocked(String),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            ApiError::NotFound(detail) => {
                tracing::warn!(detail = %detail, "API not found");
                (StatusCode::NOT_FOUND, "NOT_FOUND", detail, None)
            }
            ApiError::DeleteBlocked(reason) => {
                tracing::warn!(reason = %reason, "API delete blocked");
                (StatusCode::CONFLICT, "DELETE_BLOCKED", reason, None)
            }
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_FAILED",
                errors.to_string(),
                Some(errors.errors().to_vec()),
            ),
            ApiError::BadRequest(detail) => {
                tracing::warn!(detail = %detail, "API bad request");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail, None)
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                fields,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { .. } | ServiceError::NotAssigned { .. } => {
                ApiError::NotFound(err.to_string())
            }
            ServiceError::Blocked(reason) => ApiError::DeleteBlocked(reason),
            ServiceError::Validation(errors) => ApiError::Validation(errors),
            ServiceError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

/// JSON that does not fit the request type is a field error, anything else a bad request
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                ApiError::Validation(body_field_errors(&err.body_text()))
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_server_error() {
            ApiError::Internal(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

const DESERIALIZE_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Attach a deserialization failure to the field it names, or to `body`
fn body_field_errors(text: &str) -> ValidationErrors {
    let detail = text.strip_prefix(DESERIALIZE_PREFIX).unwrap_or(text);

    if let Some(field) = detail
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        return ValidationErrors::single(field, format!("{} is required.", field_label(field)));
    }

    match detail.split_once(": ") {
        Some((path, message)) if !path.is_empty() && !path.contains(' ') => {
            ValidationErrors::single(path, message)
        }
        _ => ValidationErrors::single("body", detail),
    }
}

/// `date_of_birth` -> `Date of birth`
fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}
