use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use qa_system::{ErrorResponse, QaError};

const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// HTTP view of a pipeline failure.
///
/// Validation errors are part of the normal contract and answered with 200 and
/// an `{error}` body. Everything else is opaque to the client and logged here.
pub struct ApiError(pub QaError);

impl From<QaError> for ApiError {
    fn from(err: QaError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            QaError::Validation(message) => {
                log::debug!("Rejected request: {}", message);
                (StatusCode::OK, Json(ErrorResponse { error: message })).into_response()
            }
            other => {
                log::error!("Request failed: {}", other);
                internal_error()
            }
        }
    }
}

pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

pub fn unprocessable(message: impl Into<String>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
