use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryJson;
use persistence::favorite::repository::FavoriteRepositoryJson;
use persistence::product::repository::ProductRepositoryJson;
use persistence::store::JsonStore;
use persistence::user::repository::UserRepositoryJson;
use security::{Argon2PasswordHasher, JwtTokenService};

use business::application::auth::login::LoginUseCaseImpl;
use business::application::auth::register::RegisterUseCaseImpl;
use business::application::auth::validate_token::ValidateTokenUseCaseImpl;
use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::favorite::create::CreateFavoriteUseCaseImpl;
use business::application::favorite::delete::DeleteFavoriteUseCaseImpl;
use business::application::favorite::get_all::GetAllFavoritesUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::user::delete::DeleteUserUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;
use business::application::user::get_by_id::GetUserByIdUseCaseImpl;
use business::application::user::update::UpdateUserUseCaseImpl;

use crate::config::auth_config::AuthConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub favorite_api: crate::api::favorite::routes::FavoriteApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub user_api: crate::api::user::routes::UserApi,
}

impl DependencyContainer {
    pub fn new(store: Arc<JsonStore>, auth: &AuthConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters, all sharing the one store
        let category_repository = Arc::new(CategoryRepositoryJson::new(store.clone()));
        let product_repository = Arc::new(ProductRepositoryJson::new(store.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryJson::new(store.clone()));
        let user_repository = Arc::new(UserRepositoryJson::new(store));

        let hasher = Arc::new(Argon2PasswordHasher);
        let tokens = Arc::new(JwtTokenService::new(
            &auth.jwt_secret,
            auth.expiration_hours,
        ));

        // Category use cases
        let category_api = crate::api::category::routes::CategoryApi::new(
            Arc::new(CreateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllCategoriesUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCategoryByIdUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteCategoryUseCaseImpl {
                repository: category_repository,
                logger: logger.clone(),
            }),
        );

        // Product use cases
        let product_api = crate::api::product::routes::ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository,
                logger: logger.clone(),
            }),
        );

        // Favorite use cases
        let favorite_api = crate::api::favorite::routes::FavoriteApi::new(
            Arc::new(CreateFavoriteUseCaseImpl {
                repository: favorite_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllFavoritesUseCaseImpl {
                repository: favorite_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteFavoriteUseCaseImpl {
                repository: favorite_repository,
                logger: logger.clone(),
            }),
        );

        // User use cases
        let user_api = crate::api::user::routes::UserApi::new(
            Arc::new(GetAllUsersUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetUserByIdUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateUserUseCaseImpl {
                repository: user_repository.clone(),
                hasher: hasher.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Auth use cases
        let auth_api = crate::api::auth::routes::AuthApi::new(
            Arc::new(RegisterUseCaseImpl {
                repository: user_repository.clone(),
                hasher: hasher.clone(),
                logger: logger.clone(),
            }),
            Arc::new(LoginUseCaseImpl {
                repository: user_repository.clone(),
                hasher,
                tokens: tokens.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ValidateTokenUseCaseImpl {
                repository: user_repository,
                tokens,
                logger,
            }),
        );

        Ok(Self {
            health_api,
            auth_api,
            category_api,
            favorite_api,
            product_api,
            user_api,
        })
    }
}
