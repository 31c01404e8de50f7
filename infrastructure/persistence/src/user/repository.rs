use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use business::domain::errors::RepositoryError;
use business::domain::user::model::{NewUser, User};
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::store::{Collection, JsonStore, next_id};

pub struct UserRepositoryJson {
    store: Arc<JsonStore>,
}

impl UserRepositoryJson {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryJson {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let session = self.store.session().await;

        session
            .records::<UserEntity>(Collection::Users)?
            .into_iter()
            .map(UserEntity::into_domain)
            .collect()
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<User>, RepositoryError> {
        let session = self.store.session().await;

        session
            .records::<UserEntity>(Collection::Users)?
            .into_iter()
            .find(|entity| entity.id == id)
            .map(UserEntity::into_domain)
            .transpose()
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let session = self.store.session().await;
        let email = email.to_lowercase();

        session
            .records::<UserEntity>(Collection::Users)?
            .into_iter()
            .find(|entity| entity.email.to_lowercase() == email)
            .map(UserEntity::into_domain)
            .transpose()
    }

    async fn add(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut session = self.store.session().await;
        let mut entities = session.records::<UserEntity>(Collection::Users)?;

        let email = user.email.to_lowercase();
        if entities.iter().any(|e| e.email.to_lowercase() == email) {
            return Err(RepositoryError::duplicated());
        }

        let user = user.into_user(next_id(entities.iter().map(|e| e.id))?);
        entities.push(UserEntity::from(&user));
        session.replace(Collection::Users, &entities).await?;

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let mut session = self.store.session().await;
        let mut entities = session.records::<UserEntity>(Collection::Users)?;

        let slot = entities
            .iter_mut()
            .find(|entity| entity.id == user.id)
            .ok_or_else(RepositoryError::not_found)?;

        let mut updated = user.clone();
        updated.touch(Utc::now());
        *slot = UserEntity::from(&updated);
        session.replace(Collection::Users, &entities).await?;

        Ok(updated)
    }

    async fn delete(&self, id: u64) -> Result<bool, RepositoryError> {
        let mut session = self.store.session().await;
        let mut entities = session.records::<UserEntity>(Collection::Users)?;

        let Some(slot) = entities.iter_mut().find(|entity| entity.id == id) else {
            return Ok(false);
        };

        let mut user = slot.clone().into_domain()?;
        user.deactivate(Utc::now());
        *slot = UserEntity::from(&user);
        session.replace(Collection::Users, &entities).await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;
    use business::domain::user::model::NewUserProps;

    async fn repository() -> (tempfile::TempDir, UserRepositoryJson) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        tokio::fs::write(&path, r#"{"users":[]}"#).await.unwrap();
        let store = JsonStore::connect(&StoreConfig::new(&path)).await.unwrap();
        (dir, UserRepositoryJson::new(Arc::new(store)))
    }

    fn new_user(email: &str) -> NewUser {
        NewUser::new(NewUserProps {
            email: email.to_string(),
            password_hash: "$argon2id$v=19$hash".to_string(),
            name: "Grace Hopper".to_string(),
            role: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_find_user_by_email_ignoring_case() {
        let (_dir, repo) = repository().await;
        let created = repo.add(new_user("grace@example.com")).await.unwrap();

        let found = repo.get_by_email("GRACE@Example.COM").await.unwrap();

        assert_eq!(found.map(|u| u.id), Some(created.id));
    }

    #[tokio::test]
    async fn should_reject_duplicate_email() {
        let (_dir, repo) = repository().await;
        repo.add(new_user("grace@example.com")).await.unwrap();

        let result = repo.add(new_user("Grace@example.com")).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::Duplicated));
    }

    #[tokio::test]
    async fn should_stamp_updated_at_on_update() {
        let (_dir, repo) = repository().await;
        let mut user = repo.add(new_user("grace@example.com")).await.unwrap();
        user.rename("Ada Lovelace").unwrap();

        let updated = repo.update(&user).await.unwrap();

        assert!(updated.updated_at.is_some());
        let stored = repo.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Ada Lovelace");
        assert_eq!(stored.updated_at, updated.updated_at);
    }

    #[tokio::test]
    async fn should_fail_to_update_unknown_user() {
        let (_dir, repo) = repository().await;
        let ghost = new_user("ghost@example.com").into_user(42);

        let result = repo.update(&ghost).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn should_soft_delete_and_keep_id_reserved() {
        let (_dir, repo) = repository().await;
        let first = repo.add(new_user("grace@example.com")).await.unwrap();

        assert!(repo.delete(first.id).await.unwrap());
        assert!(!repo.delete(77).await.unwrap());

        let stored = repo.get_by_id(first.id).await.unwrap().unwrap();
        assert!(!stored.is_active);
        assert!(stored.updated_at.is_some());

        let second = repo.add(new_user("alan@example.com")).await.unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }
}
