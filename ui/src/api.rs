//! API client for communicating with the SoftSell server

use crate::types::{ApiError, ChatRequest, ChatResponse, FALLBACK_REPLY};
use gloo_net::http::Request;

/// POST a JSON body and decode a JSON reply
pub async fn post_json<T, R>(url: &str, body: &T) -> Result<R, String>
where
    T: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Request failed with status {}", status));
    }

    resp.json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask the support assistant. Always yields text to show.
pub async fn ask_assistant(base_url: &str, message: &str) -> String {
    let url = format!("{}/api/chat", base_url);
    let body = ChatRequest {
        message: message.to_string(),
    };

    match post_json::<_, ChatResponse>(&url, &body).await {
        Ok(resp) => resp.response,
        Err(e) => {
            tracing::error!("Chat request failed: {}", e);
            FALLBACK_REPLY.to_string()
        }
    }
}
