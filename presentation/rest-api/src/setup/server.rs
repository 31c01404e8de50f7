use poem::http::StatusCode;
use poem::middleware::{Cors, Tracing};
use poem::web::Json;
use poem::{
    Endpoint, EndpointExt, IntoResponse, Response, Route, Server as PoemServer,
    listener::TcpListener,
};
use poem_openapi::OpenApiService;
use serde_json::json;

use crate::api::error::INTERNAL_SERVER_ERROR;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let base_url = config.server.base_url();
        let app = build_app(container, config.cors, base_url.clone());

        tracing::info!("Server running at {}", base_url);
        tracing::info!("Swagger UI at {}/docs", base_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", base_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Routes, docs and middleware around the wired APIs.
pub fn build_app(container: DependencyContainer, cors: Cors, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            container.health_api,
            container.auth_api,
            container.category_api,
            container.favorite_api,
            container.product_api,
            container.user_api,
        ),
        "Storefront API",
        "0.1.0",
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .with(cors)
        .with(Tracing)
        .catch_all_error(render_error)
}

/// Framework-level failures (unknown route, unreadable body, missing
/// credentials) get the same `{"error": ...}` body as the handlers.
async fn render_error(err: poem::Error) -> Response {
    let status = err.status();
    let message = if status.is_server_error() {
        tracing::error!("Unhandled request error: {}", err);
        INTERNAL_SERVER_ERROR.to_string()
    } else {
        err.to_string()
    };

    error_body(status, message)
}

fn error_body(status: StatusCode, message: String) -> Response {
    Json(json!({ "error": message }))
        .with_status(status)
        .into_response()
}
