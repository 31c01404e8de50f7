use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};

pub struct DeleteUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserUseCaseImpl {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), UserError> {
        self.logger.info(&format!("Deactivating user: {}", params.id));

        if params.id == 0 {
            return Err(UserError::InvalidId);
        }

        if self.repository.get_by_id(params.id).await?.is_none() {
            return Err(UserError::NotFound);
        }

        if !self.repository.delete(params.id).await? {
            self.logger
                .warn(&format!("User {} vanished before deactivation", params.id));
            return Err(UserError::DeleteFailed);
        }

        self.logger.info(&format!("User deactivated: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockUserRepo, mock_logger, stored_user};

    #[tokio::test]
    async fn should_soft_delete_existing_user() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(stored_user(id, "grace@example.com"))));
        mock_repo
            .expect_delete()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(true));

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(DeleteUserParams { id: 4 }).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_user() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_delete().never();

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteUserParams { id: 4 }).await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }

    #[tokio::test]
    async fn should_report_failed_delete() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(stored_user(id, "grace@example.com"))));
        mock_repo.expect_delete().returning(|_| Ok(false));

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteUserParams { id: 4 }).await;

        assert!(matches!(result.unwrap_err(), UserError::DeleteFailed));
    }
}
