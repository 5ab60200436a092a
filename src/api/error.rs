//! Translation of dispatch refusals into HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::types::ErrorResponse;
use crate::error::{ConfigurationError, DispatchError};

/// Errors returned from API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The engine refused the scenario.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Dispatch(DispatchError::Configuration(_)) => StatusCode::BAD_REQUEST,
            Self::Dispatch(DispatchError::Infeasible(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Reason code reported in the body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Dispatch(e) => e.code(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Dispatch(ConfigurationError::Malformed(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Dispatch(DispatchError::Configuration(_)) => {
                tracing::debug!(error = %self, code = self.code(), "rejected scenario");
            }
            Self::Dispatch(DispatchError::Infeasible(_)) => {
                tracing::warn!(error = %self, code = self.code(), "infeasible dispatch");
            }
        }

        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
