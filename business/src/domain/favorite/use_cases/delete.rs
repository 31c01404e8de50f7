use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;

pub struct DeleteFavoriteParams {
    pub user_id: u64,
    pub product_id: u64,
}

#[async_trait]
pub trait DeleteFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: DeleteFavoriteParams) -> Result<(), FavoriteError>;
}
