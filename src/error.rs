//! Error types for the bookstore server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes reported in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    BadValue = 3,
    NoSuchAuthor = 4,
    NoSuchBook = 5,
    AuthorAlreadyPersisted = 6,
    UnknownAuthor = 7,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller supplied data violating a precondition; detected before any write
    #[error("Invalid input: {1}")]
    InvalidInput(ErrorCode, String),

    /// Mutation targeted a key that does not exist
    #[error("Invalid state: {1}")]
    InvalidState(ErrorCode, String),

    /// Read of a key that does not exist
    #[error("Not found: {1}")]
    NotFound(ErrorCode, String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code and error code reported to HTTP clients
    pub fn status(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::InvalidInput(code, _) => (StatusCode::BAD_REQUEST, *code),
            AppError::InvalidState(code, _) => (StatusCode::BAD_REQUEST, *code),
            AppError::NotFound(code, _) => (StatusCode::NOT_FOUND, *code),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbFailure),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let message = match &self {
            AppError::InvalidInput(_, msg)
            | AppError::InvalidState(_, msg)
            | AppError::NotFound(_, msg)
            | AppError::Validation(msg) => msg.clone(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_on_missing_key_is_a_client_error() {
        let err = AppError::InvalidState(ErrorCode::NoSuchAuthor, "Author 9 does not exist".into());
        assert_eq!(err.status(), (StatusCode::BAD_REQUEST, ErrorCode::NoSuchAuthor));
    }

    #[test]
    fn test_absent_read_is_not_found() {
        let err = AppError::NotFound(ErrorCode::NoSuchBook, "Book 978-0 not found".into());
        assert_eq!(err.status(), (StatusCode::NOT_FOUND, ErrorCode::NoSuchBook));
    }

    #[test]
    fn test_invalid_input_is_a_client_error() {
        let err = AppError::InvalidInput(ErrorCode::UnknownAuthor, "Unknown author 4".into());
        assert_eq!(err.status(), (StatusCode::BAD_REQUEST, ErrorCode::UnknownAuthor));
        assert_eq!(err.to_string(), "Invalid input: Unknown author 4");
    }

    #[test]
    fn test_database_errors_are_server_errors() {
        let err = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbFailure));
    }
}
