use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::user::model::{User, UserProps};
use business::domain::user::value_objects::UserRole;

/// Stored user. `password` holds the hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: u64,
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

/// Accepts RFC 3339 as well as offset-less ISO timestamps, read as UTC.
fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(naive.and_utc()))
        .map_err(serde::de::Error::custom)
}

impl UserEntity {
    pub fn into_domain(self) -> Result<User, RepositoryError> {
        User::new(UserProps {
            id: self.id,
            email: self.email,
            password_hash: self.password,
            name: self.name,
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
            is_active: self.is_active,
        })
        .map_err(RepositoryError::invalid_record)
    }
}

impl From<&User> for UserEntity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            password: user.password_hash.clone(),
            name: user.name.clone(),
            role: user.role,
            created_at: Some(user.created_at),
            updated_at: user.updated_at,
            is_active: user.is_active,
        }
    }
}
