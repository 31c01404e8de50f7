use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let category = NewCategory::new(params.name)?;

        let created = self
            .repository
            .add(category)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CategoryError::AlreadyExists,
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category created with id: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_create_category_when_name_valid() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_add()
            .withf(|category| category.name == "Books")
            .returning(|category| Ok(category.into_category(1)));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "Books".to_string(),
            })
            .await;

        let category = result.unwrap();
        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Books");
    }

    #[tokio::test]
    async fn should_reject_category_when_name_is_empty() {
        let mock_repo = MockCategoryRepo::new();

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_category_when_name_already_exists() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_add()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "Books".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::AlreadyExists));
    }
}
