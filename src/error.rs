//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::OperationError;

/// Body carried by every failure response. The wire contract collapses all
/// business failures into a not-found response with this sentinel.
pub const FAILURE_BODY: &str = "0";

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A ledger operation could not be applied.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// Balance lookup for an account that does not exist.
    #[error("account not found: {0}")]
    AccountNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Operation(err) => {
                tracing::debug!("operation rejected: {err}");
            }
            AppError::AccountNotFound(id) => {
                tracing::debug!("balance lookup for unknown account: {id}");
            }
        }

        (StatusCode::NOT_FOUND, FAILURE_BODY).into_response()
    }
}
