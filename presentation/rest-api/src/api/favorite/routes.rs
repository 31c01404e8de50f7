use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::favorite::use_cases::create::{CreateFavoriteParams, CreateFavoriteUseCase};
use business::domain::favorite::use_cases::delete::{DeleteFavoriteParams, DeleteFavoriteUseCase};
use business::domain::favorite::use_cases::get_all::GetAllFavoritesUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::favorite::dto::{FavoriteRequest, FavoriteResponse};
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    create_use_case: Arc<dyn CreateFavoriteUseCase>,
    get_all_use_case: Arc<dyn GetAllFavoritesUseCase>,
    delete_use_case: Arc<dyn DeleteFavoriteUseCase>,
}

impl FavoriteApi {
    pub fn new(
        create_use_case: Arc<dyn CreateFavoriteUseCase>,
        get_all_use_case: Arc<dyn GetAllFavoritesUseCase>,
        delete_use_case: Arc<dyn DeleteFavoriteUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            delete_use_case,
        }
    }
}

/// Favorite products API
#[OpenApi]
impl FavoriteApi {
    /// List all favorites
    #[oai(path = "/favorites", method = "get", tag = "ApiTags::Favorites")]
    async fn get_all_favorites(&self) -> GetAllFavoritesResponse {
        match self.get_all_use_case.execute().await {
            Ok(favorites) => GetAllFavoritesResponse::Ok(Json(
                favorites.into_iter().map(|f| f.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllFavoritesResponse::InternalError(json)
            }
        }
    }

    /// Add a favorite
    ///
    /// The product must exist; each pair can only be stored once.
    #[oai(path = "/favorites", method = "post", tag = "ApiTags::Favorites")]
    async fn create_favorite(&self, body: Json<FavoriteRequest>) -> CreateFavoriteResponse {
        let params = CreateFavoriteParams {
            user_id: body.0.user_id,
            product_id: body.0.product_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(favorite) => CreateFavoriteResponse::Created(Json(favorite.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateFavoriteResponse::BadRequest(json),
                    _ => CreateFavoriteResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a favorite
    #[oai(path = "/favorites", method = "delete", tag = "ApiTags::Favorites")]
    async fn delete_favorite(&self, body: Json<FavoriteRequest>) -> DeleteFavoriteResponse {
        let params = DeleteFavoriteParams {
            user_id: body.0.user_id,
            product_id: body.0.product_id,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteFavoriteResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteFavoriteResponse::BadRequest(json),
                    404 => DeleteFavoriteResponse::NotFound(json),
                    _ => DeleteFavoriteResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllFavoritesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FavoriteResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateFavoriteResponse {
    #[oai(status = 201)]
    Created(Json<FavoriteResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteFavoriteResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
