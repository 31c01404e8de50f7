use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;

pub struct UpdateUserParams {
    pub id: u64,
    pub name: Option<String>,
    /// Plaintext; re-validated and re-hashed before it reaches the store.
    pub password: Option<String>,
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, params: UpdateUserParams) -> Result<UserProfile, UserError>;
}
