use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};
use business::domain::user::use_cases::get_all::GetAllUsersUseCase;
use business::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};
use business::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{UpdateUserRequest, UserResponse};

pub struct UserApi {
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
    update_use_case: Arc<dyn UpdateUserUseCase>,
    delete_use_case: Arc<dyn DeleteUserUseCase>,
}

impl UserApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
        get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
        update_use_case: Arc<dyn UpdateUserUseCase>,
        delete_use_case: Arc<dyn DeleteUserUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// User administration API
#[OpenApi]
impl UserApi {
    /// List all users, deactivated ones included
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn get_all_users(&self) -> GetAllUsersResponse {
        match self.get_all_use_case.execute().await {
            Ok(users) => {
                let responses: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();
                GetAllUsersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllUsersResponse::InternalError(json)
            }
        }
    }

    /// Get a user by ID
    #[oai(path = "/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_user_by_id(&self, id: Path<u64>) -> GetUserByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetUserByIdParams { id: id.0 })
            .await
        {
            Ok(user) => GetUserByIdResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetUserByIdResponse::BadRequest(json),
                    404 => GetUserByIdResponse::NotFound(json),
                    _ => GetUserByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a user's name and/or password
    #[oai(path = "/users/:id", method = "put", tag = "ApiTags::Users")]
    async fn update_user(&self, id: Path<u64>, body: Json<UpdateUserRequest>) -> UpdateUserResponse {
        let params = UpdateUserParams {
            id: id.0,
            name: body.0.name,
            password: body.0.password,
        };

        match self.update_use_case.execute(params).await {
            Ok(user) => UpdateUserResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateUserResponse::BadRequest(json),
                    404 => UpdateUserResponse::NotFound(json),
                    _ => UpdateUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Deactivate a user
    ///
    /// Soft delete: the account is kept but can no longer log in.
    #[oai(path = "/users/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete_user(&self, id: Path<u64>) -> DeleteUserResponse {
        match self
            .delete_use_case
            .execute(DeleteUserParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteUserResponse::BadRequest(json),
                    404 => DeleteUserResponse::NotFound(json),
                    _ => DeleteUserResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserByIdResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
