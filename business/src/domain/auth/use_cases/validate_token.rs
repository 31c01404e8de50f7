use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::model::UserProfile;

pub struct ValidateTokenParams {
    pub token: String,
}

#[async_trait]
pub trait ValidateTokenUseCase: Send + Sync {
    async fn execute(&self, params: ValidateTokenParams) -> Result<UserProfile, AuthError>;
}
