use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Favorite;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Favorite>, RepositoryError>;
    /// Fails with `MissingReference` when the product does not exist and with
    /// `Duplicated` when the pair is already stored. The user is not checked.
    async fn add(&self, favorite: Favorite) -> Result<Favorite, RepositoryError>;
    /// Returns `false` when the pair is not stored.
    async fn delete(&self, favorite: &Favorite) -> Result<bool, RepositoryError>;
}
