use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ProductError::NameEmpty
            | ProductError::CategoryEmpty
            | ProductError::InvalidPrice
            | ProductError::InvalidId
            | ProductError::CategoryNotFound => StatusCode::BAD_REQUEST,
            ProductError::NotFound | ProductError::NoneInCategory => StatusCode::NOT_FOUND,
            ProductError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, &self)
    }
}
