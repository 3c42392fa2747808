//! API error type and status-code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use wealthtrack_core::errors::{DatabaseError, Error, LedgerError};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Core(Error),
    Unauthorized(String),
    NotFound(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Core(err) => match err {
                Error::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
                Error::Database(DatabaseError::UniqueViolation(_)) => StatusCode::CONFLICT,
                Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                Error::Validation(_) => StatusCode::BAD_REQUEST,
                Error::Ledger(LedgerError::UnsupportedTransactionType(_)) => {
                    StatusCode::BAD_REQUEST
                }
                Error::Ledger(_) => StatusCode::UNPROCESSABLE_ENTITY,
                Error::Repository(_) | Error::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Core(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Core(err) => err.to_string(),
            ApiError::Unauthorized(message) | ApiError::NotFound(message) => message.clone(),
        };
        if status.is_server_error() {
            tracing::error!("API error: {}", message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
