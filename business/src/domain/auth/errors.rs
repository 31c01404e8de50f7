/// Failures reported by the credential adapters (password hasher, token service).
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credential.hashing_failed")]
    Hashing,
    #[error("credential.signing_failed")]
    Signing,
    #[error("credential.token_expired")]
    Expired,
    #[error("credential.token_invalid")]
    Invalid,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.email_already_registered")]
    EmailAlreadyRegistered,
    /// Shared by every login failure so callers cannot tell which check failed.
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.token_expired")]
    TokenExpired,
    #[error("auth.invalid_token")]
    InvalidToken,
    #[error("auth.credential_failure")]
    Credential(CredentialError),
    #[error(transparent)]
    User(#[from] crate::domain::user::errors::UserError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
