use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            CategoryError::NameEmpty | CategoryError::InvalidId | CategoryError::AlreadyExists => {
                StatusCode::BAD_REQUEST
            }
            CategoryError::NotFound => StatusCode::NOT_FOUND,
            CategoryError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, &self)
    }
}
