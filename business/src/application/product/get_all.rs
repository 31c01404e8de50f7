use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        let category = params.category.filter(|c| !c.is_empty());

        match &category {
            Some(name) => self
                .logger
                .info(&format!("Fetching products in category: {}", name)),
            None => self.logger.info("Fetching all products"),
        }

        let filtered = category.is_some();
        let products = self.repository.get_all(category).await?;

        if filtered && products.is_empty() {
            return Err(ProductError::NoneInCategory);
        }

        self.logger
            .debug(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
