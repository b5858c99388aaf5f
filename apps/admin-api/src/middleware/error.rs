//! Error handling middleware - RFC 7807 compliant responses.
//!
//! Every failure of the admin endpoints is answered with `400 Bad Request`.
//! Missing records get a generic message and internal failures are logged
//! but never described to the caller.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use blog_core::{DomainError, FieldErrors};
use blog_shared::ErrorResponse;
use std::fmt;

use crate::observability::current_request_id;

/// Detail returned when a record cannot be found.
pub const INVALID_ID: &str = "Invalid id provided";

/// Detail returned for unexpected failures.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    InvalidId,
    Validation(FieldErrors),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InvalidId => write!(f, "{}", INVALID_ID),
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::InvalidId => ErrorResponse::bad_request(INVALID_ID),
            AppError::Validation(errors) => ErrorResponse::validation(errors.clone().into_inner()),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                ErrorResponse::bad_request(GENERIC_FAILURE)
            }
        };

        problem_response(self.status_code(), error)
    }
}

/// Render a problem body, tagged with the current request ID when known.
pub(crate) fn problem_response(status: StatusCode, error: ErrorResponse) -> HttpResponse {
    let error = match current_request_id() {
        Some(request_id) => error.with_request_id(request_id),
        None => error,
    };
    HttpResponse::build(status).json(error)
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::BadRequest(msg) => AppError::BadRequest(msg),
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type, %id, "Record not found");
                AppError::InvalidId
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Malformed JSON bodies are answered like any other bad request.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Malformed query strings are answered like any other bad request.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
