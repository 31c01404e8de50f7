use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::{AuthError, CredentialError};
use crate::domain::auth::services::TokenService;
use crate::domain::auth::use_cases::validate_token::{ValidateTokenParams, ValidateTokenUseCase};
use crate::domain::logger::Logger;
use crate::domain::user::model::UserProfile;
use crate::domain::user::repository::UserRepository;

pub struct ValidateTokenUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ValidateTokenUseCase for ValidateTokenUseCaseImpl {
    async fn execute(&self, params: ValidateTokenParams) -> Result<UserProfile, AuthError> {
        let claims = self.tokens.decode(&params.token).map_err(|e| {
            self.logger.debug(&format!("Token rejected: {}", e));
            match e {
                CredentialError::Expired => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let user = self
            .repository
            .get_by_id(claims.user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| {
                self.logger.warn(&format!(
                    "Token subject {} is unknown or deactivated",
                    claims.user_id
                ));
                AuthError::InvalidToken
            })?;

        Ok(user.profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::services::TokenClaims;
    use crate::domain::user::value_objects::UserRole;
    use crate::test_support::{MockTokens, MockUserRepo, mock_logger, stored_user};
    use chrono::{Duration, Utc};

    fn tokens_for(user_id: u64) -> MockTokens {
        let mut mock_tokens = MockTokens::new();
        mock_tokens.expect_decode().returning(move |_| {
            let now = Utc::now();
            Ok(TokenClaims {
                user_id,
                email: "grace@example.com".to_string(),
                role: UserRole::Customer,
                issued_at: now,
                expires_at: now + Duration::hours(1),
            })
        });
        mock_tokens
    }

    fn params() -> ValidateTokenParams {
        ValidateTokenParams {
            token: "signed.token.value".to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_profile_for_valid_token() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == 5)
            .returning(|id| Ok(Some(stored_user(id, "grace@example.com"))));

        let use_case = ValidateTokenUseCaseImpl {
            repository: Arc::new(mock_repo),
            tokens: Arc::new(tokens_for(5)),
            logger: mock_logger(),
        };

        let profile = use_case.execute(params()).await.unwrap();

        assert_eq!(profile.id, 5);
    }

    #[tokio::test]
    async fn should_report_expired_token() {
        let mut mock_tokens = MockTokens::new();
        mock_tokens
            .expect_decode()
            .returning(|_| Err(CredentialError::Expired));

        let use_case = ValidateTokenUseCaseImpl {
            repository: Arc::new(MockUserRepo::new()),
            tokens: Arc::new(mock_tokens),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn should_reject_tampered_token() {
        let mut mock_tokens = MockTokens::new();
        mock_tokens
            .expect_decode()
            .returning(|_| Err(CredentialError::Invalid));

        let use_case = ValidateTokenUseCaseImpl {
            repository: Arc::new(MockUserRepo::new()),
            tokens: Arc::new(mock_tokens),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn should_reject_deactivated_subject() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            let mut user = stored_user(id, "grace@example.com");
            user.is_active = false;
            Ok(Some(user))
        });

        let use_case = ValidateTokenUseCaseImpl {
            repository: Arc::new(mock_repo),
            tokens: Arc::new(tokens_for(5)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn should_reject_unknown_subject() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = ValidateTokenUseCaseImpl {
            repository: Arc::new(mock_repo),
            tokens: Arc::new(tokens_for(5)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
    }
}
