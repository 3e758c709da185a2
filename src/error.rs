// HTTP API Error Types
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::database::manager::DatabaseError;
use crate::services::ServiceError;

/// HTTP API error. Every failure of a request ends up here and is
/// serialized once by `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request, body is the sorted list of violations
    ValidationError(Vec<String>),

    // 400 Bad Request, body is the message
    BadRequest(String),

    // Body or path could not be read; keeps the rejection's own status
    // (400, 413, 415, ...)
    Rejected { status: StatusCode, message: String },

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to JSON response body: a list for validation failures,
    /// a plain string for everything else
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::ValidationError(errors) => json!(errors),
            ApiError::BadRequest(msg) => json!(msg),
            ApiError::Rejected { message, .. } => json!(message),
            ApiError::InternalServerError(msg) => json!(msg),
        }
    }
}

// Static constructor methods
impl ApiError {
    /// Violations are sorted so the body is deterministic
    pub fn validation_error(mut errors: Vec<String>) -> Self {
        errors.sort();
        ApiError::ValidationError(errors)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InstructorNotValid(msg) => ApiError::bad_request(msg),
            // REST would say 404; existing clients expect 400
            ServiceError::CourseNotFound(msg) => ApiError::bad_request(msg),
            ServiceError::InstructorNotFound(msg) => ApiError::bad_request(msg),
            ServiceError::Database(db_err) => db_err.into(),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::internal_server_error(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::rejected(rejection.status(), rejection.body_text())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ValidationError(errors) => write!(f, "{}", errors.join(", ")),
            ApiError::BadRequest(msg) | ApiError::InternalServerError(msg) => write!(f, "{}", msg),
            ApiError::Rejected { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ApiError::ValidationError(errors) => {
                tracing::error!("Validation failed : {}", self);
                tracing::info!("errors : {:?}", errors);
            }
            _ => tracing::error!("Exception observed : {}", self),
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
