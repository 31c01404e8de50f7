use chrono::{DateTime, Utc};

use super::errors::CredentialError;
use crate::domain::user::model::User;
use crate::domain::user::value_objects::{PlainPassword, UserRole};

/// Service port for one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &PlainPassword) -> Result<String, CredentialError>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, CredentialError>;
}

/// Identity asserted by a session token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub user_id: u64,
    pub email: String,
    pub role: UserRole,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Service port for issuing and checking signed, time-limited session tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, CredentialError>;

    /// Checks signature and expiry before returning the claims.
    fn decode(&self, token: &str) -> Result<TokenClaims, CredentialError>;
}
