//! Standard response envelope helpers.

use crate::validation::FieldError;
use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const STATUS_ERROR: &str = "Error";

/// Body of every failed request: `{"status": "Error", "error": "<message>"}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
}

/// Serialize `data` as JSON with the given status. `Json` sets `Content-Type: application/json`.
pub fn write_json<T: Serialize>(status: StatusCode, data: T) -> (StatusCode, Json<T>) {
    (status, Json(data))
}

/// Wrap a single error's message verbatim.
pub fn common_error(err: &impl Display) -> ErrorResponse {
    ErrorResponse {
        status: STATUS_ERROR.to_string(),
        error: err.to_string(),
    }
}

/// One message per violated field, in order, joined with `", "`.
pub fn validation_error(errs: &[FieldError]) -> ErrorResponse {
    ErrorResponse {
        status: STATUS_ERROR.to_string(),
        error: join_field_errors(errs),
    }
}

pub fn join_field_errors(errs: &[FieldError]) -> String {
    errs.iter()
        .map(FieldError::message)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldTag;

    #[test]
    fn common_error_keeps_message() {
        let body = common_error(&"body is empty");
        assert_eq!(body.status, "Error");
        assert_eq!(body.error, "body is empty");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"status": "Error", "error": "body is empty"}));
    }

    #[test]
    fn validation_error_renders_required_and_default_messages() {
        let body = validation_error(&[
            FieldError::new("Name", FieldTag::Required),
            FieldError::new("Email", FieldTag::Email),
        ]);
        assert_eq!(
            body.error,
            "Name is required, Key: 'Student.Email' Error:Field validation for 'Email' failed on the 'email' tag"
        );
    }
}
