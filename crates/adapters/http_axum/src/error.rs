//! HTTP error response mapping.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roomhub_domain::error::{RoomHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RoomHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RoomHubError);

impl From<RoomHubError> for ApiError {
    fn from(err: RoomHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(RoomHubError::Validation(err))
    }
}

/// A body that is not valid JSON, or does not fit the request type, is a
/// validation failure like any other.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from(ValidationError::MalformedPayload(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RoomHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RoomHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            RoomHubError::Storage(err) => {
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

/// Parse a path segment into a typed id.
pub(crate) fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::from(ValidationError::InvalidId(raw.to_string())))
}
