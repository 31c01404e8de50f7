use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product: {} in category {}",
            params.name, params.category
        ));

        let product = NewProduct::new(NewProductProps {
            name: params.name,
            category: params.category,
            price: params.price,
        })?;

        let created = self
            .repository
            .add(product)
            .await
            .map_err(|e| match e {
                RepositoryError::MissingReference => ProductError::CategoryNotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProductRepo, mock_logger};

    fn params(category: &str, price: f64) -> CreateProductParams {
        CreateProductParams {
            name: "Dune".to_string(),
            category: category.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn should_create_product_when_category_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_add()
            .withf(|product| product.name == "Dune" && product.category == "Books")
            .times(1)
            .returning(|product| Ok(product.into_product(1)));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params("Books", 9.99)).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.price, 9.99);
    }

    #[tokio::test]
    async fn should_fail_when_category_unknown() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_add()
            .returning(|_| Err(RepositoryError::MissingReference));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Vinyl", 9.99)).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::CategoryNotFound
        ));
    }

    #[tokio::test]
    async fn should_reject_non_positive_price_before_storing() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Books", 0.0)).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_surface_store_failures_as_repository_errors() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_add()
            .returning(|_| Err(RepositoryError::Unavailable));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Books", 9.99)).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Unavailable)
        ));
    }
}
