use crate::AppState;
use crate::types::{ChatRequest, ChatResponse, InfoResponse};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::chat::chat,
        crate::api::handlers::info::info,
    ),
    components(schemas(ChatRequest, ChatResponse, InfoResponse)),
    tags(
        (name = "chat", description = "Customer support assistant"),
        (name = "info", description = "Server information")
    ),
    info(title = "SoftSell API", description = "Backend for the SoftSell marketing site")
)]
pub struct ApiDoc;

/// Routes mounted under `/api`
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(crate::api::handlers::chat::chat))
        .route("/info", get(crate::api::handlers::info::info))
}

/// Full application: API, health check, middleware and optional UI
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config_manager.config().server.cors_origins);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", create_router());

    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    #[cfg(feature = "ui")]
    let app = app.fallback(crate::api::assets::serve_ui);

    app.layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Allow-list of origins, or any origin when none are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(parsed)
}
