use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            UserError::InvalidEmail
            | UserError::PasswordTooShort
            | UserError::PasswordMissingUppercase
            | UserError::PasswordMissingDigit
            | UserError::NameEmpty
            | UserError::NameLength
            | UserError::NameContainsDigits
            | UserError::InvalidId
            | UserError::DeleteFailed => StatusCode::BAD_REQUEST,
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::Hashing | UserError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_validation_code_in_body() {
        let (status, body) = UserError::PasswordMissingDigit.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "user.password_missing_digit");
    }

    #[test]
    fn should_hide_hashing_failure() {
        let (status, body) = UserError::Hashing.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "internal_server_error");
    }
}
