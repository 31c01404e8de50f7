use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Category, NewCategory};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: u64) -> Result<Option<Category>, RepositoryError>;
    /// Fails with `Duplicated` when a category with the same name exists.
    async fn add(&self, category: NewCategory) -> Result<Category, RepositoryError>;
    /// Returns `false` when no category carries that name.
    async fn delete_by_name(&self, name: &str) -> Result<bool, RepositoryError>;
}
