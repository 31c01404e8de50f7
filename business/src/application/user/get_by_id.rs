use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};

pub struct GetUserByIdUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserByIdUseCase for GetUserByIdUseCaseImpl {
    async fn execute(&self, params: GetUserByIdParams) -> Result<UserProfile, UserError> {
        self.logger
            .info(&format!("Fetching user by id: {}", params.id));

        if params.id == 0 {
            return Err(UserError::InvalidId);
        }

        let user = self
            .repository
            .get_by_id(params.id)
            .await?
            .ok_or(UserError::NotFound)?;

        Ok(user.profile())
    }
}
