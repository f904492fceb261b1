// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse};

use crate::database::manager::DatabaseError;
use crate::validation::ValidationError;

/// Every failure a handler can produce. Rendered as a status code and a plain-text body.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(ValidationError),

    // 401 Unauthorized - no identity on the request
    Unauthenticated,

    // 403 Forbidden - identity present but the parent store is not theirs
    Unauthorized,

    // 404 Not Found - mutation addressed no row
    NotFound(String),

    // 409 Conflict - foreign key refused the write
    Conflict(String),

    // 500 Internal Server Error
    Internal,
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(err) => err.to_string(),
            ApiError::Unauthenticated => "Unauthenticated".to_string(),
            ApiError::Unauthorized => "Unauthorized".to_string(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Conflict(msg) => msg.clone(),
            ApiError::Internal => "Internal error".to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    /// Log an unexpected failure under the operation tag and collapse it to a 500
    pub fn internal(tag: &'static str, err: impl std::fmt::Display) -> Self {
        tracing::error!(operation = tag, "[{}] {}", tag, err);
        ApiError::Internal
    }

    /// Translate a datastore failure for the operation named by `tag`.
    ///
    /// Constraint violations keep a client-facing message; everything else is logged
    /// under the tag and collapses to a bare 500.
    pub fn from_database(tag: &'static str, err: DatabaseError, conflict_message: &str) -> Self {
        match err {
            DatabaseError::Constraint(detail) => {
                tracing::warn!(operation = tag, "constraint violation: {}", detail);
                ApiError::conflict(conflict_message)
            }
            other => ApiError::internal(tag, other),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), self.message()).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
