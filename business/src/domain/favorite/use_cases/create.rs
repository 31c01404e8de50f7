use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;

pub struct CreateFavoriteParams {
    pub user_id: u64,
    pub product_id: u64,
}

#[async_trait]
pub trait CreateFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: CreateFavoriteParams) -> Result<Favorite, FavoriteError>;
}
