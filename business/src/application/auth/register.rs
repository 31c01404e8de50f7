use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::PasswordHasher;
use crate::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::model::{NewUser, NewUserProps, UserProfile};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::value_objects::{Email, PlainPassword, UserRole, normalize_name};

pub struct RegisterUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<UserProfile, AuthError> {
        let email = Email::parse(&params.email)?;
        let password = PlainPassword::new(params.password)?;
        let name = normalize_name(&params.name)?;

        self.logger.info(&format!("Registering user: {}", email));

        if self.repository.get_by_email(email.as_str()).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let password_hash = self.hasher.hash(&password).map_err(|e| {
            self.logger
                .error(&format!("Password hashing failed for {}: {}", email, e));
            AuthError::Credential(e)
        })?;

        let user = NewUser::new(NewUserProps {
            email: email.into_inner(),
            password_hash,
            name,
            role: Some(UserRole::Customer),
        })?;

        let created = self.repository.add(user).await.map_err(|e| match e {
            RepositoryError::Duplicated => AuthError::EmailAlreadyRegistered,
            other => AuthError::Repository(other),
        })?;

        self.logger
            .info(&format!("User registered with id: {}", created.id));
        Ok(created.profile())
    }
}
