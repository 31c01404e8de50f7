use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::category::entity::CategoryEntity;
use crate::store::{Collection, JsonStore, next_id};

pub struct ProductRepositoryJson {
    store: Arc<JsonStore>,
}

impl ProductRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    async fn get_all(&self, category: Option<String>) -> Result<Vec<Product>, RepositoryError> {
        let session = self.store.session().await;

        session
            .records::<ProductEntity>(Collection::Products)?
            .into_iter()
            .filter(|entity| category.as_ref().is_none_or(|c| &entity.category == c))
            .map(ProductEntity::into_domain)
            .collect()
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Product>, RepositoryError> {
        let session = self.store.session().await;

        session
            .records::<ProductEntity>(Collection::Products)?
            .into_iter()
            .find(|entity| entity.id == id)
            .map(ProductEntity::into_domain)
            .transpose()
    }

    async fn add(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut session = self.store.session().await;

        let categories = session.records::<CategoryEntity>(Collection::Categories)?;
        if !categories.iter().any(|c| c.name == product.category) {
            return Err(RepositoryError::missing_reference());
        }

        let mut entities = session.records::<ProductEntity>(Collection::Products)?;
        let product = product.into_product(next_id(entities.iter().map(|e| e.id))?);
        entities.push(ProductEntity::from(&product));
        session.replace(Collection::Products, &entities).await?;

        Ok(product)
    }
}
