use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::Favorite;
use business::domain::favorite::repository::FavoriteRepository;

use super::entity::FavoriteEntity;
use crate::product::entity::ProductEntity;
use crate::store::{Collection, JsonStore};

pub struct FavoriteRepositoryJson {
    store: Arc<JsonStore>,
}

impl FavoriteRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Favorite>, RepositoryError> {
        let session = self.store.session().await;

        session
            .records::<FavoriteEntity>(Collection::Favorites)?
            .into_iter()
            .map(FavoriteEntity::into_domain)
            .collect()
    }

    async fn add(&self, favorite: Favorite) -> Result<Favorite, RepositoryError> {
        let mut session = self.store.session().await;

        let products = session.records::<ProductEntity>(Collection::Products)?;
        if !products.iter().any(|p| p.id == favorite.product_id) {
            return Err(RepositoryError::missing_reference());
        }

        let mut entities = session.records::<FavoriteEntity>(Collection::Favorites)?;
        if entities.iter().any(|entity| entity.matches(&favorite)) {
            return Err(RepositoryError::duplicated());
        }

        entities.push(FavoriteEntity::from(&favorite));
        session.replace(Collection::Favorites, &entities).await?;

        Ok(favorite)
    }

    async fn delete(&self, favorite: &Favorite) -> Result<bool, RepositoryError> {
        let mut session = self.store.session().await;
        let mut entities = session.records::<FavoriteEntity>(Collection::Favorites)?;

        let before = entities.len();
        entities.retain(|entity| !entity.matches(favorite));
        if entities.len() == before {
            return Ok(false);
        }

        session.replace(Collection::Favorites, &entities).await?;
        Ok(true)
    }
}
