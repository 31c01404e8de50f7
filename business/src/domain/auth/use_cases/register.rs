use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::model::UserProfile;

pub struct RegisterParams {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<UserProfile, AuthError>;
}
