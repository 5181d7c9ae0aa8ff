use crate::{
    AppState,
    llm::{AssistantReply, SupportAssistant},
    types::{AppError, ChatRequest, ChatResponse, Result},
};
use axum::{Json, extract::State};
use tracing::{info, warn};

/// Ask the support assistant a question
///
/// Provider failures never surface as errors: the response carries the
/// configured apology with `fallback` set instead.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply or fallback apology", body = ChatResponse),
        (status = 400, description = "Empty message"),
        (status = 413, description = "Request body too large")
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::InvalidInput(
            "Message cannot be empty".to_string(),
        ));
    }

    let config = state.config_manager.config();
    let reply = match state.llm_factory.create_default().await {
        Ok(client) => {
            SupportAssistant::from_config(client, &config.assistant)
                .reply(message)
                .await
        }
        Err(e) => {
            warn!(error = %e, "Could not create assistant client, sending fallback reply");
            AssistantReply::fallback(&config.assistant.fallback_reply)
        }
    };

    info!(
        chars = message.chars().count(),
        fallback = reply.is_fallback,
        "Chat message answered"
    );

    Ok(Json(ChatResponse {
        response: reply.text,
        fallback: reply.is_fallback,
    }))
}
