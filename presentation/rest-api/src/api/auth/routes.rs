use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use business::domain::auth::use_cases::validate_token::{
    ValidateTokenParams, ValidateTokenUseCase,
};

use crate::api::auth::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerToken;
use crate::api::tags::ApiTags;
use crate::api::user::dto::UserResponse;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    validate_token_use_case: Arc<dyn ValidateTokenUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        validate_token_use_case: Arc<dyn ValidateTokenUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            validate_token_use_case,
        }
    }
}

/// Registration and session API
#[OpenApi]
impl AuthApi {
    /// Register a new customer account
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterParams {
            email: body.0.email,
            password: body.0.password,
            name: body.0.name,
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in with email and password
    ///
    /// Unknown email, wrong password and deactivated accounts all answer
    /// the same 401.
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginEndpointResponse {
        let params = LoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(result) => LoginEndpointResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LoginEndpointResponse::BadRequest(json),
                    401 => LoginEndpointResponse::Unauthorized(json),
                    _ => LoginEndpointResponse::InternalError(json),
                }
            }
        }
    }

    /// Profile of the token holder
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn me(&self, auth: BearerToken) -> MeResponse {
        match self
            .validate_token_use_case
            .execute(ValidateTokenParams {
                token: auth.0.token,
            })
            .await
        {
            Ok(user) => MeResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => MeResponse::Unauthorized(json),
                    _ => MeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginEndpointResponse {
    #[oai(status = 200)]
    Ok(Json<LoginResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MeResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
