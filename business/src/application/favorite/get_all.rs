use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_all::GetAllFavoritesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllFavoritesUseCase for GetAllFavoritesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Favorite>, FavoriteError> {
        self.logger.info("Fetching all favorites");
        Ok(self.repository.get_all().await?)
    }
}
