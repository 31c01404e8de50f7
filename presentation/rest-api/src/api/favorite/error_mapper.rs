use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::favorite::errors::FavoriteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            FavoriteError::InvalidUserId
            | FavoriteError::InvalidProductId
            | FavoriteError::ProductNotFound
            | FavoriteError::AlreadyExists => StatusCode::BAD_REQUEST,
            FavoriteError::NotFound => StatusCode::NOT_FOUND,
            FavoriteError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, &self)
    }
}
