//! Embedded Leptos frontend
//!
//! Serves the trunk build output compiled into the binary. Unknown paths
//! without a file extension get `index.html` so client-side routes such as
//! `/login` survive a reload.

use axum::{
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "ui/dist"]
struct Assets;

const INDEX: &str = "index.html";

/// Fallback handler for every route the API does not claim
pub async fn serve_ui(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    if let Some(response) = embedded(path) {
        return response;
    }

    if is_client_route(path) {
        if let Some(response) = embedded(INDEX) {
            return response;
        }
    }

    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn embedded(path: &str) -> Option<Response> {
    let file = Assets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let cache = if path == INDEX {
        "no-cache"
    } else {
        "public, max-age=31536000, immutable"
    };

    Some(
        (
            [
                (header::CONTENT_TYPE, mime.as_ref().to_string()),
                (header::CACHE_CONTROL, cache.to_string()),
            ],
            file.data.into_owned(),
        )
            .into_response(),
    )
}

/// Paths the browser router owns rather than files in the bundle
fn is_client_route(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_none_or(|segment| !segment.contains('.'))
}
