// src/handlers/analyze.rs
use crate::emotion::{AnalysisPayload, AnalysisResult, Modality};
use crate::AppState;
use axum::{extract::Extension, routing::post, Json, Router};
use base64::prelude::*;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub modality: Modality,
    /// Base64-encoded bytes for the face and voice modalities.
    #[serde(default)]
    pub data: Option<String>,
    /// Raw text for the text modality.
    #[serde(default)]
    pub text: Option<String>,
}

pub fn analyze_routes() -> Router {
    Router::new().route("/analyze", post(analyze_endpoint))
}

/// Runs one emotion analyzer over the supplied payload. Undecodable payloads
/// follow the same soft-error contract as undecodable images: a neutral
/// result with the error attached, HTTP 200.
pub async fn analyze_endpoint(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    let payload = match request.modality {
        Modality::Face | Modality::Voice => {
            let encoded = request.data.unwrap_or_default();
            match BASE64_STANDARD.decode(encoded.as_bytes()) {
                Ok(bytes) if request.modality == Modality::Face => AnalysisPayload::Image(bytes),
                Ok(bytes) => AnalysisPayload::Audio(bytes),
                Err(e) => {
                    tracing::warn!("Rejecting analyze payload: {}", e);
                    return Json(AnalysisResult::soft_error(format!(
                        "invalid base64 payload: {}",
                        e
                    )));
                }
            }
        }
        Modality::Text => AnalysisPayload::Text(request.text.unwrap_or_default()),
    };

    Json(state.emotion_engine.analyze(payload).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::emotion::EmotionEngine;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            config: AppConfig {
                gemini_api_key: None,
                model: crate::config::DEFAULT_MODEL.to_string(),
                bind_addr: std::net::SocketAddr::from(([127, 0, 0, 1], 8000)),
            },
            gemini_client: None,
            emotion_engine: EmotionEngine::new(),
        })
    }

    #[tokio::test]
    async fn test_text_modality_returns_placeholder() {
        let request = AnalyzeRequest {
            modality: Modality::Text,
            data: None,
            text: Some("what a day".to_string()),
        };
        let Json(result) = analyze_endpoint(Extension(state()), Json(request)).await;
        assert_eq!(result.emotion, "neutral");
        assert_eq!(result.confidence, 0.0);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_invalid_base64_is_a_soft_error() {
        let request = AnalyzeRequest {
            modality: Modality::Face,
            data: Some("%%% not base64 %%%".to_string()),
            text: None,
        };
        let Json(result) = analyze_endpoint(Extension(state()), Json(request)).await;
        assert_eq!(result.emotion, "neutral");
        assert!(result.error.unwrap().contains("invalid base64"));
    }

    #[tokio::test]
    async fn test_face_modality_with_undecodable_bytes() {
        let request = AnalyzeRequest {
            modality: Modality::Face,
            data: Some(BASE64_STANDARD.encode(b"not an image")),
            text: None,
        };
        let Json(result) = analyze_endpoint(Extension(state()), Json(request)).await;
        assert_eq!(result.emotion, "neutral");
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn test_voice_modality_is_placeholder() {
        let request = AnalyzeRequest {
            modality: Modality::Voice,
            data: Some(BASE64_STANDARD.encode([0u8; 64])),
            text: None,
        };
        let Json(result) = analyze_endpoint(Extension(state()), Json(request)).await;
        assert_eq!(result.emotion, "neutral");
        assert_eq!(result.confidence, 0.0);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_modality_deserializes_lowercase() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"modality": "face", "data": ""}"#).unwrap();
        assert_eq!(request.modality, Modality::Face);
    }
}
