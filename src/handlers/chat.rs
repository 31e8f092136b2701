// src/handlers/chat.rs
use crate::prompt::{build_prompt, EmotionContext, EMPA};
use crate::gemini_client::TextGenerator;
use crate::AppState;
use axum::{extract::Extension, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub emotion_context: EmotionContext,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

pub fn chat_routes() -> Router {
    Router::new().route("/chat", post(chat_endpoint))
}

/// Fuses the emotion signals into the prompt and asks the model for a reply.
/// Every failure path still produces a usable response string for the user:
/// no API key means a deterministic mock reply, and a failed model call is
/// converted into an apology embedding the error, never a 500.
pub async fn chat_endpoint(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let Some(client) = &state.gemini_client else {
        tracing::info!("Serving mock chat response (no API key configured)");
        return Json(ChatResponse {
            response: mock_response(&request),
        });
    };

    let prompt = build_prompt(&request.message, &request.emotion_context, &EMPA);
    tracing::debug!(prompt_chars = prompt.len(), "Built empathetic prompt");

    let response = match client.generate_text(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to generate chat response: {}", e);
            format!("I'm feeling a bit disconnected right now. ({})", e)
        }
    };

    Json(ChatResponse { response })
}

fn mock_response(request: &ChatRequest) -> String {
    let face = request
        .emotion_context
        .face
        .as_deref()
        .unwrap_or("neutral");
    format!(
        "[MOCK MODE] I see you are feeling {}. I can't generate a real response \
because my API key is missing, but I'm listening! You said: '{}'",
        face, request.message
    )
}
