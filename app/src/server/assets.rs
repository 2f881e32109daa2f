//! Static file serving for the embedded overlay page (web/).

use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;
use serde_json::json;

#[derive(Embed)]
#[folder = "web/"]
struct OverlayAssets;

pub async fn overlay_index() -> Response {
    serve_embedded("index.html")
}

/// Fallback handler: unknown API-style paths get a JSON 404, anything
/// else falls back to the overlay page.
pub async fn overlay_fallback(uri: Uri) -> Response {
    let request_path = uri.path();
    if should_return_non_spa_not_found(request_path) {
        return (
            StatusCode::NOT_FOUND,
            axum::Json(json!({
                "error": "Not Found",
                "path": request_path,
            })),
        )
            .into_response();
    }

    serve_embedded(request_path.trim_start_matches('/'))
}

fn should_return_non_spa_not_found(path: &str) -> bool {
    const NON_SPA_PREFIXES: [&str; 2] = ["/api", "/ws"];

    NON_SPA_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

fn serve_embedded(path: &str) -> Response {
    let asset = OverlayAssets::get(path).or_else(|| OverlayAssets::get("index.html"));

    match asset {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.to_vec(),
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::{overlay_fallback, should_return_non_spa_not_found};
    use axum::body::to_bytes;
    use axum::http::{StatusCode, Uri, header};

    #[test]
    fn should_detect_non_spa_paths_by_root_segment() {
        let positive = ["/api", "/api/nonexistent", "/ws", "/ws/events"];
        for path in positive {
            assert!(
                should_return_non_spa_not_found(path),
                "{path} should be non-SPA"
            );
        }

        let negative = ["/", "/overlay", "/apiary", "/wsx"];
        for path in negative {
            assert!(
                !should_return_non_spa_not_found(path),
                "{path} should not be non-SPA"
            );
        }
    }

    #[tokio::test]
    async fn fallback_returns_json_404_for_unknown_api_paths() {
        let response = overlay_fallback(Uri::from_static("/api/nonexistent")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["path"], "/api/nonexistent");
    }
}
