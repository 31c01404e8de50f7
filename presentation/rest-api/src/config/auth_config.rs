use std::env;

use anyhow::{Context, bail};
use chrono::{TimeDelta, Utc};

const DEFAULT_EXPIRATION_HOURS: i64 = 24;

/// Session token settings
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub expiration_hours: i64,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET_KEY: HMAC secret for session tokens (required)
    /// - JWT_EXPIRATION_HOURS: token lifetime in hours (default: 24)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::parse(
            env::var("JWT_SECRET_KEY").ok(),
            env::var("JWT_EXPIRATION_HOURS").ok(),
        )
    }

    fn parse(secret: Option<String>, expiration_hours: Option<String>) -> anyhow::Result<Self> {
        let jwt_secret = match secret {
            Some(secret) if !secret.trim().is_empty() => secret,
            _ => bail!("JWT_SECRET_KEY must be set"),
        };

        let expiration_hours = match expiration_hours {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("JWT_EXPIRATION_HOURS is not a number: {}", raw))?,
            None => DEFAULT_EXPIRATION_HOURS,
        };

        if expiration_hours <= 0 {
            bail!("JWT_EXPIRATION_HOURS must be positive");
        }
        let lifetime_fits = TimeDelta::try_hours(expiration_hours)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .is_some();
        if !lifetime_fits {
            bail!("JWT_EXPIRATION_HOURS is out of range: {}", expiration_hours);
        }

        Ok(Self {
            jwt_secret,
            expiration_hours,
        })
    }
}
