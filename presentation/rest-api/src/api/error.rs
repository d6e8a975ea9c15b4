use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::mediator::validation::FieldError;

/// Body for unexpected (non-validation) failures.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// 400 body for validation failures: a JSON array of
/// `{propertyName, errorMessage}` entries.
pub fn field_errors(errors: &[FieldError]) -> serde_json::Value {
    serde_json::to_value(errors).unwrap_or_default()
}

/// 400 body for soft not-found results: a bare human-readable string.
pub fn message(text: &str) -> serde_json::Value {
    serde_json::Value::String(text.to_string())
}
