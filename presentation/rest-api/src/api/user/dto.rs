use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::user::model::UserProfile;
use business::domain::user::value_objects::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum UserRoleDto {
    #[oai(rename = "customer")]
    Customer,
    #[oai(rename = "manager")]
    Manager,
    #[oai(rename = "admin")]
    Admin,
}

impl From<UserRole> for UserRoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Customer => UserRoleDto::Customer,
            UserRole::Manager => UserRoleDto::Manager,
            UserRole::Admin => UserRoleDto::Admin,
        }
    }
}

/// Public view of a user; never carries the password hash.
#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: UserRoleDto,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            name: profile.name,
            role: profile.role.into(),
            created_at: profile.created_at,
            is_active: profile.is_active,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateUserRequest {
    /// New display name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New plaintext password (at least 8 characters, one uppercase, one digit)
    #[oai(skip_serializing_if_is_none)]
    pub password: Option<String>,
}
