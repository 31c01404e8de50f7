use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use tracing::warn;

use business::domain::auth::errors::CredentialError;
use business::domain::auth::services::PasswordHasher;
use business::domain::user::value_objects::PlainPassword;

/// Argon2id with the crate's default parameters and a fresh random salt per hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &PlainPassword) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_str().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                warn!("argon2 hashing failed: {}", e);
                CredentialError::Hashing
            })
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, CredentialError> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| {
            warn!("stored password hash is not a PHC string: {}", e);
            CredentialError::Invalid
        })?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => {
                warn!("argon2 verification failed: {}", e);
                Err(CredentialError::Invalid)
            }
        }
    }
}
