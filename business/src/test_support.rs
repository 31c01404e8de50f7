//! Mocks and fixtures shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::auth::errors::CredentialError;
use crate::domain::auth::services::{PasswordHasher, TokenClaims, TokenService};
use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::user::model::{NewUser, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::value_objects::{PlainPassword, UserRole};

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: u64) -> Result<Option<Category>, RepositoryError>;
        async fn add(&self, category: NewCategory) -> Result<Category, RepositoryError>;
        async fn delete_by_name(&self, name: &str) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self, category: Option<String>) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: u64) -> Result<Option<Product>, RepositoryError>;
        async fn add(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub FavoriteRepo {}

    #[async_trait]
    impl FavoriteRepository for FavoriteRepo {
        async fn get_all(&self) -> Result<Vec<Favorite>, RepositoryError>;
        async fn add(&self, favorite: Favorite) -> Result<Favorite, RepositoryError>;
        async fn delete(&self, favorite: &Favorite) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
        async fn get_by_id(&self, id: u64) -> Result<Option<User>, RepositoryError>;
        async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
        async fn add(&self, user: NewUser) -> Result<User, RepositoryError>;
        async fn update(&self, user: &User) -> Result<User, RepositoryError>;
        async fn delete(&self, id: u64) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub Hasher {}

    impl PasswordHasher for Hasher {
        fn hash(&self, password: &PlainPassword) -> Result<String, CredentialError>;
        fn verify(&self, password: &str, password_hash: &str) -> Result<bool, CredentialError>;
    }
}

mock! {
    pub Tokens {}

    impl TokenService for Tokens {
        fn issue(&self, user: &User) -> Result<String, CredentialError>;
        fn decode(&self, token: &str) -> Result<TokenClaims, CredentialError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub const STORED_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA";

pub fn stored_user(id: u64, email: &str) -> User {
    User {
        id,
        email: email.to_string(),
        password_hash: STORED_HASH.to_string(),
        name: "Grace Hopper".to_string(),
        role: UserRole::Customer,
        created_at: Utc::now(),
        updated_at: None,
        is_active: true,
    }
}

pub fn stored_product(id: u64, name: &str, category: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price: 9.99,
    }
}
