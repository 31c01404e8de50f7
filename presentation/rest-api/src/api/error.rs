use std::fmt::Display;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Generic body returned for every 5xx; the cause only goes to the log.
pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Builds the error pair for `status`, hiding server-side causes.
pub fn error_response(status: StatusCode, error: &impl Display) -> (StatusCode, Json<ErrorResponse>) {
    if status.is_server_error() {
        tracing::error!("Request failed: {}", error);
        return (status, Json(ErrorResponse::new(INTERNAL_SERVER_ERROR)));
    }

    (status, Json(ErrorResponse::new(error.to_string())))
}
