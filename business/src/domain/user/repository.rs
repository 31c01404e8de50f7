use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn get_by_id(&self, id: u64) -> Result<Option<User>, RepositoryError>;
    /// Case-insensitive lookup.
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// Fails with `Duplicated` when the email is already registered.
    async fn add(&self, user: NewUser) -> Result<User, RepositoryError>;
    /// Replaces the stored user with the same id and stamps `updated_at`.
    /// Fails with `NotFound` when the id is unknown.
    async fn update(&self, user: &User) -> Result<User, RepositoryError>;
    /// Soft delete. Returns `false` when the id is unknown.
    async fn delete(&self, id: u64) -> Result<bool, RepositoryError>;
}
