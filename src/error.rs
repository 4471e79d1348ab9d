//! Domain error types for the booking API.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError};

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid input data or a failed business precondition
    #[error("{0}")]
    InvalidInput(String),

    /// Unique-constraint violation
    #[error("{0}")]
    Conflict(String),

    /// Filesystem operation failed
    #[error("Filesystem error: {0}")]
    Filesystem(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, message) = match self {
            AppError::Database(err_str) => {
                tracing::error!("Database error: {}", err_str);
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Filesystem(err_str) => {
                tracing::error!("Filesystem error: {}", err_str);
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal storage error occurred".to_string(),
                )
            }
            AppError::NotFound(_) => (actix_web::http::StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidInput(_) => {
                (actix_web::http::StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Conflict(_) => (actix_web::http::StatusCode::CONFLICT, self.to_string()),
        };

        HttpResponse::build(status).json(ErrorBody {
            success: false,
            message,
            data: None,
        })
    }
}

/// Failure envelope: `success` is always false and `data` is always null.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}
