use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::LoginResult;
use crate::domain::auth::services::{PasswordHasher, TokenService};
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<LoginResult, AuthError> {
        let email = params.email.trim().to_lowercase();
        self.logger.info(&format!("Login attempt for: {}", email));

        let Some(user) = self.repository.get_by_email(&email).await? else {
            self.logger.warn(&format!("Login failed, unknown email: {}", email));
            return Err(AuthError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify(&params.password, &user.password_hash)
            .map_err(|e| {
                self.logger
                    .warn(&format!("Stored hash unusable for user {}: {}", user.id, e));
                AuthError::InvalidCredentials
            })?;

        if !matches {
            self.logger
                .warn(&format!("Login failed, wrong password for user {}", user.id));
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active {
            self.logger
                .warn(&format!("Login refused, user {} is deactivated", user.id));
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user).map_err(|e| {
            self.logger
                .error(&format!("Token signing failed for user {}: {}", user.id, e));
            AuthError::Credential(e)
        })?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(LoginResult {
            token,
            user: user.profile(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockHasher, MockTokens, MockUserRepo, mock_logger, stored_user};

    fn params(password: &str) -> LoginParams {
        LoginParams {
            email: "Grace@Example.com".to_string(),
            password: password.to_string(),
        }
    }

    fn repo_with(is_active: bool) -> MockUserRepo {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_email()
            .withf(|email| email == "grace@example.com")
            .returning(move |email| {
                let mut user = stored_user(5, email);
                user.is_active = is_active;
                Ok(Some(user))
            });
        mock_repo
    }

    fn hasher_accepting(password: &'static str) -> MockHasher {
        let mut mock_hasher = MockHasher::new();
        mock_hasher
            .expect_verify()
            .returning(move |given, _| Ok(given == password));
        mock_hasher
    }

    #[tokio::test]
    async fn should_issue_token_for_active_user() {
        let mut mock_tokens = MockTokens::new();
        mock_tokens
            .expect_issue()
            .withf(|user| user.id == 5)
            .returning(|_| Ok("signed.token.value".to_string()));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(repo_with(true)),
            hasher: Arc::new(hasher_accepting("Passw0rd")),
            tokens: Arc::new(mock_tokens),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Passw0rd")).await.unwrap();

        assert_eq!(result.token, "signed.token.value");
        assert_eq!(result.user.id, 5);
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let use_case = LoginUseCaseImpl {
            repository: Arc::new(repo_with(true)),
            hasher: Arc::new(hasher_accepting("Passw0rd")),
            tokens: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Wrong0ne")).await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn should_reject_deactivated_user_with_right_password() {
        let use_case = LoginUseCaseImpl {
            repository: Arc::new(repo_with(false)),
            hasher: Arc::new(hasher_accepting("Passw0rd")),
            tokens: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Passw0rd")).await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn should_reject_unknown_email() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_email().returning(|_| Ok(None));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(mock_repo),
            hasher: Arc::new(MockHasher::new()),
            tokens: Arc::new(MockTokens::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Passw0rd")).await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }
}
