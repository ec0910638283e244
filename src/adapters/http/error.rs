//! Maps service errors to flat `{ "error": message }` JSON responses.

use crate::application::accounts::AccountError;
use crate::error::{JobError, StoreError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JobError> for ApiError {
    fn from(err: JobError) -> Self {
        let message = format!("Failed to process video: {}", err);
        if err.source.is_client_error() {
            ApiError::BadRequest(message)
        } else {
            ApiError::Internal(message)
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(_) | AccountError::InvalidCredentials => {
                ApiError::BadRequest(err.to_string())
            }
            AccountError::AlreadyRegistered => ApiError::Conflict(err.to_string()),
            AccountError::Misconfigured(_)
            | AccountError::Hash(_)
            | AccountError::Token(_)
            | AccountError::Store(_) => ApiError::Internal(err.to_string()),
        }
    }
}
