//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use haikus_domain::error::{HaikuError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HaikuError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HaikuError);

impl From<HaikuError> for ApiError {
    fn from(err: HaikuError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HaikuError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HaikuError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HaikuError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
