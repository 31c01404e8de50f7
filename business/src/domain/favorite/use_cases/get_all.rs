use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;

#[async_trait]
pub trait GetAllFavoritesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Favorite>, FavoriteError>;
}
