use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::mediator::errors::DispatchError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DispatchError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            DispatchError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "dispatch.validation_failed",
            ),
            DispatchError::HandlerMissing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DispatchError",
                "dispatch.handler_missing",
            ),
            DispatchError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "store.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
