// src/handlers/system.rs
use crate::AppState;
use axum::{extract::Extension, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn system_routes() -> Router {
    Router::new()
        .route("/", get(root).post(root))
        .route("/health", get(health_check))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "EmpaAI Backend is running. Use /chat for API requests."
    }))
}

/// Static liveness probe, identical under every configuration.
async fn health_check() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

/// Configuration snapshot, useful when debugging a deployment stuck in mock
/// mode.
pub async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.model,
        "mode": if state.config.mock_mode() { "mock" } else { "live" },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::emotion::EmotionEngine;

    fn state(api_key: Option<&str>) -> Arc<AppState> {
        Arc::new(AppState {
            config: AppConfig {
                gemini_api_key: api_key.map(str::to_string),
                model: crate::config::DEFAULT_MODEL.to_string(),
                bind_addr: std::net::SocketAddr::from(([127, 0, 0, 1], 8000)),
            },
            gemini_client: None,
            emotion_engine: EmotionEngine::new(),
        })
    }

    #[tokio::test]
    async fn test_health_check_exact_body() {
        let Json(body) = health_check().await;
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn test_root_message() {
        let Json(body) = root().await;
        assert_eq!(
            body["message"],
            "EmpaAI Backend is running. Use /chat for API requests."
        );
    }

    #[tokio::test]
    async fn test_api_status_reports_mock_mode() {
        let Json(body) = api_status(Extension(state(None))).await;
        assert_eq!(body["status"], "operational");
        assert_eq!(body["mode"], "mock");
    }

    #[tokio::test]
    async fn test_api_status_reports_live_mode() {
        let Json(body) = api_status(Extension(state(Some("test-key")))).await;
        assert_eq!(body["mode"], "live");
        assert_eq!(body["model"], crate::config::DEFAULT_MODEL);
    }
}
