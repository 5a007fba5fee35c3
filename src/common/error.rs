// Error handling types for the API

use axum::{
    http::{header::RETRY_AFTER, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use super::resource::ResourceKind;
use super::validation::{ErrorCode, ValidationError};

/// A collected validation outcome, already mapped to its transport status.
#[derive(Debug)]
pub struct ValidationFailure {
    pub status: StatusCode,
    pub code: String,
    pub errors: Vec<ValidationError>,
}

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Validation failed with {} error(s)", .0.errors.len())]
    Validation(ValidationFailure),
    #[error("Too many concurrent requests")]
    TooManyConcurrentRequests,
    #[error("Contract violation: {0}")]
    ContractViolation(String),
    #[error("Internal Server Error: {0}")]
    InternalServer(String),
    #[error("Database Error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
}

impl ErrorCode {
    /// Transport status and machine-readable code for this error on `field`.
    pub fn transport_status(&self, resource: ResourceKind, field: &str) -> (StatusCode, String) {
        match self {
            ErrorCode::MalformedQuery => (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string()),
            ErrorCode::UnprocessableSearchPattern => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE".to_string(),
            ),
            ErrorCode::UnrecognizedEnumValue => (
                StatusCode::BAD_REQUEST,
                format!(
                    "{}_{}_INVALID",
                    resource.code_prefix(),
                    screaming_snake(last_segment(field))
                ),
            ),
            ErrorCode::HandleAlreadyExists => (
                StatusCode::CONFLICT,
                format!("{}_HANDLE_EXISTS", resource.code_prefix()),
            ),
            ErrorCode::HandleNotFound => (
                StatusCode::NOT_FOUND,
                format!("{}_NOT_FOUND", resource.code_prefix()),
            ),
            ErrorCode::RequiredFieldMissing
            | ErrorCode::FieldTooLong
            | ErrorCode::NumericOutOfRange
            | ErrorCode::InvalidFormat => (
                StatusCode::BAD_REQUEST,
                "FIELD_VALIDATION_ERROR".to_string(),
            ),
        }
    }
}

fn last_segment(field: &str) -> &str {
    field.rsplit('.').next().unwrap_or(field)
}

/// `maxSigLife` -> `MAX_SIG_LIFE`
fn screaming_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code, errors) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST".to_string(), None)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND".to_string(), None),
            ApiError::Validation(failure) => (
                failure.status,
                "Request failed validation".to_string(),
                failure.code,
                Some(failure.errors),
            ),
            ApiError::TooManyConcurrentRequests => {
                let body = ErrorResponse {
                    error: "Service is temporarily unable to handle more concurrent requests"
                        .to_string(),
                    code: "TOO_MANY_CONCURRENT_REQUESTS".to_string(),
                    errors: None,
                };
                let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
                response
                    .headers_mut()
                    .insert(RETRY_AFTER, HeaderValue::from_static("1"));
                return response;
            }
            ApiError::ContractViolation(msg) => {
                error!(error = %msg, "Contract violation while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                    "INTERNAL_SERVER_ERROR".to_string(),
                    None,
                )
            }
            ApiError::InternalServer(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "INTERNAL_SERVER_ERROR".to_string(),
                None,
            ),
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database operation failed".to_string(),
                    "DATABASE_ERROR".to_string(),
                    None,
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message,
            code,
            errors,
        };

        (status, Json(error_response)).into_response()
    }
}
