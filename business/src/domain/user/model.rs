use chrono::{DateTime, Utc};

use super::errors::UserError;
use super::value_objects::{Email, UserRole, normalize_name};

const MIN_PASSWORD_HASH_LENGTH: usize = 8;

pub struct NewUserProps {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Option<UserRole>,
}

/// A validated user that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        let email = Email::parse(&props.email)?;
        let name = normalize_name(&props.name)?;
        check_password_hash(&props.password_hash)?;

        Ok(Self {
            email: email.into_inner(),
            password_hash: props.password_hash,
            name,
            role: props.role.unwrap_or_default(),
            created_at: Utc::now(),
        })
    }

    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            name: self.name,
            role: self.role,
            created_at: self.created_at,
            updated_at: None,
            is_active: true,
        }
    }
}

/// Every field of a stored user, as read back from persistence.
pub struct UserProps {
    pub id: u64,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl User {
    /// Rebuilds a stored user, re-running every field check.
    /// A missing creation timestamp is filled with the current time.
    pub fn new(props: UserProps) -> Result<Self, UserError> {
        let email = Email::parse(&props.email)?;
        let name = normalize_name(&props.name)?;
        check_password_hash(&props.password_hash)?;

        Ok(Self {
            id: props.id,
            email: email.into_inner(),
            password_hash: props.password_hash,
            name,
            role: props.role,
            created_at: props.created_at.unwrap_or_else(Utc::now),
            updated_at: props.updated_at,
            is_active: props.is_active,
        })
    }

    pub fn rename(&mut self, name: &str) -> Result<(), UserError> {
        self.name = normalize_name(name)?;
        Ok(())
    }

    pub fn change_password_hash(&mut self, password_hash: String) -> Result<(), UserError> {
        check_password_hash(&password_hash)?;
        self.password_hash = password_hash;
        Ok(())
    }

    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    pub fn deactivate(&mut self, at: DateTime<Utc>) {
        self.is_active = false;
        self.touch(at);
    }

    /// Public view of the user, without the password hash.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            created_at: self.created_at,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

fn check_password_hash(password_hash: &str) -> Result<(), UserError> {
    if password_hash.chars().count() < MIN_PASSWORD_HASH_LENGTH {
        return Err(UserError::PasswordTooShort);
    }
    Ok(())
}
