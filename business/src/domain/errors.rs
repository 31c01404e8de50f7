/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    /// A write referenced an entity (category name, product id) that does not exist.
    #[error("repository.missing_reference")]
    MissingReference,
    /// A stored record could not be decoded or failed domain validation.
    #[error("repository.invalid_record: {0}")]
    InvalidRecord(String),
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.persistence")]
    Persistence,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn missing_reference() -> Self {
        RepositoryError::MissingReference
    }
    pub fn invalid_record(reason: impl std::fmt::Display) -> Self {
        RepositoryError::InvalidRecord(reason.to_string())
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
}
