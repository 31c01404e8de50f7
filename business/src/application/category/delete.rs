use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::NewCategory;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        self.logger
            .info(&format!("Deleting category: {}", params.name));

        let category = NewCategory::new(params.name)?;

        let deleted = self.repository.delete_by_name(&category.name).await?;
        if !deleted {
            return Err(CategoryError::NotFound);
        }

        self.logger
            .info(&format!("Category deleted: {}", category.name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_delete_category_when_exists() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_delete_by_name()
            .withf(|name| name == "Books")
            .times(1)
            .returning(|_| Ok(true));

        let use_case = DeleteCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCategoryParams {
                name: "Books".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_category() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_delete_by_name().returning(|_| Ok(false));

        let use_case = DeleteCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCategoryParams {
                name: "Vinyl".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_empty_name_without_touching_repository() {
        let mock_repo = MockCategoryRepo::new();

        let use_case = DeleteCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCategoryParams {
                name: " ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }
}
