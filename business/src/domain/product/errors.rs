#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.not_found")]
    NotFound,
    #[error("product.category_not_found")]
    CategoryNotFound,
    #[error("product.none_in_category")]
    NoneInCategory,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
