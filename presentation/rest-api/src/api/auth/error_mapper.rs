use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match self {
            AuthError::User(err) => return err.into_error_response(),
            AuthError::EmailAlreadyRegistered => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::TokenExpired | AuthError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Credential(_) | AuthError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error_response(status, &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::auth::errors::CredentialError;
    use business::domain::user::errors::UserError;

    #[test]
    fn should_use_one_message_for_every_login_failure() {
        let (status, body) = AuthError::InvalidCredentials.into_error_response();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.0.error, "auth.invalid_credentials");
    }

    #[test]
    fn should_delegate_validation_errors_to_user_mapping() {
        let (status, body) = AuthError::User(UserError::InvalidEmail).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "user.invalid_email");
    }

    #[test]
    fn should_hide_signing_failure() {
        let (status, body) = AuthError::Credential(CredentialError::Signing).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "internal_server_error");
    }
}
