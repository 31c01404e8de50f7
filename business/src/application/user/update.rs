use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::services::PasswordHasher;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};
use crate::domain::user::value_objects::PlainPassword;

pub struct UpdateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUserUseCase for UpdateUserUseCaseImpl {
    async fn execute(&self, params: UpdateUserParams) -> Result<UserProfile, UserError> {
        self.logger.info(&format!("Updating user: {}", params.id));

        if params.id == 0 {
            return Err(UserError::InvalidId);
        }

        let mut user = self
            .repository
            .get_by_id(params.id)
            .await?
            .ok_or(UserError::NotFound)?;

        if let Some(name) = params.name.as_deref() {
            user.rename(name)?;
        }

        if let Some(password) = params.password {
            let password = PlainPassword::new(password)?;
            let password_hash = self.hasher.hash(&password).map_err(|e| {
                self.logger
                    .error(&format!("Password hashing failed for user {}: {}", user.id, e));
                UserError::Hashing
            })?;
            user.change_password_hash(password_hash)?;
        }

        let updated = self.repository.update(&user).await.map_err(|e| match e {
            RepositoryError::NotFound => UserError::NotFound,
            other => UserError::Repository(other),
        })?;

        self.logger.info(&format!("User updated: {}", updated.id));
        Ok(updated.profile())
    }
}
