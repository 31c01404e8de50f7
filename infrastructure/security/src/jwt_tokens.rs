use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use business::domain::auth::errors::CredentialError;
use business::domain::auth::services::{TokenClaims, TokenService};
use business::domain::user::model::User;
use business::domain::user::value_objects::UserRole;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user_id: u64,
    email: String,
    role: UserRole,
    iat: i64,
    exp: i64,
}

/// HS256 session tokens signed with a shared secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// `None` when the configured lifetime does not fit a `Duration`.
    ttl: Option<Duration>,
}

impl JwtTokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::try_hours(expiration_hours),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat"]);
        validation
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &User) -> Result<String, CredentialError> {
        let now = Utc::now();
        let expires_at = self
            .ttl
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                debug!("token lifetime overflows the calendar range");
                CredentialError::Signing
            })?;
        let claims = Claims {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                debug!("JWT encode failed: {}", e);
                CredentialError::Signing
            })
    }

    fn decode(&self, token: &str) -> Result<TokenClaims, CredentialError> {
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Self::validation())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CredentialError::Expired,
                _ => {
                    debug!("JWT rejected: {}", e);
                    CredentialError::Invalid
                }
            })?;

        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or(CredentialError::Invalid)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(CredentialError::Invalid)?;

        Ok(TokenClaims {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
            issued_at,
            expires_at,
        })
    }
}
