use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products whose category equals `category`, or every product when `None`.
    async fn get_all(&self, category: Option<String>) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: u64) -> Result<Option<Product>, RepositoryError>;
    /// Fails with `MissingReference` when the product's category does not exist.
    async fn add(&self, product: NewProduct) -> Result<Product, RepositoryError>;
}
