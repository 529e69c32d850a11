pub mod health;
pub mod layout;
pub mod stats;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/api/v1/breakpoint", get(layout::handle_get_breakpoint))
        .route("/api/v1/layout", get(layout::handle_get_layout))
        .route("/api/v1/layout/text", get(layout::handle_get_layout_text))
        .route("/api/v1/layout/:cols", get(layout::handle_get_layout_for_cols))
        .route("/api/v1/anchors/:id", get(layout::handle_get_anchor))
        // Stats
        .route("/api/v1/stats", get(stats::handle_get_stats))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::layout::FillerSource;
    use crate::site::Site;
    use crate::stats::SiteStats;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                stats_path: PathBuf::from("data/github-stats.json"),
                filler_path: None,
            },
            site: Arc::new(Site::new(SiteStats::default(), FillerSource::bundled())),
        }
    }

    async fn send_get(uri: &str) -> Response {
        build_router(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ── health & breakpoint ─────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health() {
        let response = send_get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_breakpoint_endpoint() {
        let response = send_get("/api/v1/breakpoint?width=700").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["cols"], 60);
        assert_eq!(body["fontSize"], 12);
    }

    #[tokio::test]
    async fn test_breakpoint_requires_width() {
        let response = send_get("/api/v1/breakpoint").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // ── layout ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_layout_for_viewport() {
        let response = send_get("/api/v1/layout?width=1920").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["breakpoint"]["cols"], 120);
        assert_eq!(body["layout"]["cols"], 120);
        let rows = body["layout"]["rows"].as_u64().unwrap() as usize;
        assert_eq!(body["layout"]["cells"].as_array().unwrap().len(), rows);
        assert_eq!(body["layout"]["embeddedBlocks"][0]["id"], "photo");
        assert_eq!(body["layout"]["cells"][0][0]["type"], "filler");
    }

    #[tokio::test]
    async fn test_layout_text() {
        let response = send_get("/api/v1/layout/text?width=320").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.lines().all(|line| line.chars().count() == 40));
        assert!(text.contains("MILAN ROTHER"));
    }

    #[tokio::test]
    async fn test_layout_for_explicit_cols() {
        let response = send_get("/api/v1/layout/73").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["cols"], 73);
    }

    #[tokio::test]
    async fn test_layout_rejects_out_of_range_cols() {
        for uri in ["/api/v1/layout/0", "/api/v1/layout/401"] {
            let response = send_get(uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = json_body(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    // ── anchors & stats ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_anchor_lookup() {
        let response = send_get("/api/v1/anchors/contact?width=1024").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["cols"], 100);
        assert_eq!(body["anchor"]["id"], "contact");
        assert!(body["anchor"]["row"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_unknown_anchor_is_not_found() {
        let response = send_get("/api/v1/anchors/blog?width=1024").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let response = send_get("/api/v1/stats").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["source"], "data/github-stats.json");
        assert_eq!(body["stats"]["current"]["pathsim"]["stars"], 0);
    }
}
