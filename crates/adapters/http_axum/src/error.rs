//! HTTP error response mapping.

use std::error::Error as StdError;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use inventory_domain::error::{InventoryError, ValidationError};

const INTERNAL_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

/// Maps [`InventoryError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(InventoryError);

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedPayload(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::MalformedPayload(rejection.body_text()).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::InvalidId(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            InventoryError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            InventoryError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            InventoryError::StateConflict(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            InventoryError::Storage(_) => {
                tracing::error!(error = %error_chain(&self.0), "unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Render an error and all of its sources as `outer: inner: ...`.
pub(crate) fn error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
