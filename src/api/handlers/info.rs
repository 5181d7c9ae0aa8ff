use crate::{AppState, types::InfoResponse};
use axum::{Json, extract::State};

/// Describe the running server and the configured assistant model
#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Server information", body = InfoResponse)
    ),
    tag = "info"
)]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let config = state.config_manager.config();

    Json(InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: config.assistant.provider.name().to_string(),
        model: config.assistant.model().to_string(),
    })
}
