use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::delete::{DeleteFavoriteParams, DeleteFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct DeleteFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteFavoriteUseCase for DeleteFavoriteUseCaseImpl {
    async fn execute(&self, params: DeleteFavoriteParams) -> Result<(), FavoriteError> {
        self.logger.info(&format!(
            "Removing product {} from favorites of user {}",
            params.product_id, params.user_id
        ));

        let favorite = Favorite::new(params.user_id, params.product_id)?;

        if !self.repository.delete(&favorite).await? {
            return Err(FavoriteError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockFavoriteRepo, mock_logger};

    #[tokio::test]
    async fn should_delete_favorite_when_stored() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_delete()
            .withf(|favorite| favorite.user_id == 2 && favorite.product_id == 3)
            .times(1)
            .returning(|_| Ok(true));

        let use_case = DeleteFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteFavoriteParams {
                user_id: 2,
                product_id: 3,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_pair() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let use_case = DeleteFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteFavoriteParams {
                user_id: 2,
                product_id: 3,
            })
            .await;

        assert!(matches!(result.unwrap_err(), FavoriteError::NotFound));
    }
}
