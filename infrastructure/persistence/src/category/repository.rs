use std::sync::Arc;

use async_trait::async_trait;

use business::domain::category::model::{Category, NewCategory};
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;
use crate::store::{Collection, JsonStore, next_id};

pub struct CategoryRepositoryJson {
    store: Arc<JsonStore>,
}

impl CategoryRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let session = self.store.session().await;

        session
            .records::<CategoryEntity>(Collection::Categories)?
            .into_iter()
            .map(CategoryEntity::into_domain)
            .collect()
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Category>, RepositoryError> {
        let session = self.store.session().await;

        session
            .records::<CategoryEntity>(Collection::Categories)?
            .into_iter()
            .find(|entity| entity.id == id)
            .map(CategoryEntity::into_domain)
            .transpose()
    }

    async fn add(&self, category: NewCategory) -> Result<Category, RepositoryError> {
        let mut session = self.store.session().await;
        let mut entities = session.records::<CategoryEntity>(Collection::Categories)?;

        if entities.iter().any(|entity| entity.name == category.name) {
            return Err(RepositoryError::duplicated());
        }

        let category = category.into_category(next_id(entities.iter().map(|e| e.id))?);
        entities.push(CategoryEntity::from(&category));
        session.replace(Collection::Categories, &entities).await?;

        Ok(category)
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let mut session = self.store.session().await;
        let mut entities = session.records::<CategoryEntity>(Collection::Categories)?;

        let before = entities.len();
        entities.retain(|entity| entity.name != name);
        if entities.len() == before {
            return Ok(false);
        }

        session.replace(Collection::Categories, &entities).await?;
        Ok(true)
    }
}
