use poem_openapi::Object;

use business::domain::auth::model::LoginResult;

use crate::api::user::dto::UserResponse;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    pub email: String,
    /// At least 8 characters, one uppercase letter and one digit
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginResponse {
    /// Bearer token for `Authorization` headers
    pub token: String,
    pub user: UserResponse,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token,
            user: result.user.into(),
        }
    }
}
