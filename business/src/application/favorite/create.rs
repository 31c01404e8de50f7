use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::create::{CreateFavoriteParams, CreateFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct CreateFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateFavoriteUseCase for CreateFavoriteUseCaseImpl {
    async fn execute(&self, params: CreateFavoriteParams) -> Result<Favorite, FavoriteError> {
        self.logger.info(&format!(
            "Adding product {} to favorites of user {}",
            params.product_id, params.user_id
        ));

        let favorite = Favorite::new(params.user_id, params.product_id)?;

        self.repository
            .add(favorite)
            .await
            .map_err(|e| match e {
                RepositoryError::MissingReference => FavoriteError::ProductNotFound,
                RepositoryError::Duplicated => FavoriteError::AlreadyExists,
                other => FavoriteError::Repository(other),
            })
    }
}
