use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;

pub struct GetUserByIdParams {
    pub id: u64,
}

#[async_trait]
pub trait GetUserByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetUserByIdParams) -> Result<UserProfile, UserError>;
}
