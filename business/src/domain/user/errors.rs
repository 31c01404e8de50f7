#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.password_missing_uppercase")]
    PasswordMissingUppercase,
    #[error("user.password_missing_digit")]
    PasswordMissingDigit,
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.name_length")]
    NameLength,
    #[error("user.name_contains_digits")]
    NameContainsDigits,
    #[error("user.invalid_id")]
    InvalidId,
    #[error("user.not_found")]
    NotFound,
    #[error("user.delete_failed")]
    DeleteFailed,
    #[error("user.password_hashing")]
    Hashing,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
