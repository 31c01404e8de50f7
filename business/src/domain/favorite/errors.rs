#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.invalid_user_id")]
    InvalidUserId,
    #[error("favorite.invalid_product_id")]
    InvalidProductId,
    #[error("favorite.product_not_found")]
    ProductNotFound,
    #[error("favorite.already_exists")]
    AlreadyExists,
    #[error("favorite.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
