use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod config;
mod emotion;
mod gemini_client;
mod handlers;
mod middleware;
mod prompt;

// AppState holds the startup configuration, the optional Gemini client (None
// means mock mode) and the multimodal emotion engine. Read-only after
// initialization.
pub struct AppState {
    pub config: config::AppConfig,
    pub gemini_client: Option<Arc<dyn gemini_client::TextGenerator>>,
    pub emotion_engine: emotion::EmotionEngine,
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let app_config = config::AppConfig::from_env();

    // Initialize Gemini client if an API key is provided; otherwise the /chat
    // endpoint serves deterministic mock responses.
    let gemini_client: Option<Arc<dyn gemini_client::TextGenerator>> = match &app_config
        .gemini_api_key
    {
        Some(api_key) => {
            tracing::info!("Initializing Gemini client (model: {})...", app_config.model);
            Some(Arc::new(gemini_client::GeminiClient::new(
                api_key.clone(),
                app_config.model.clone(),
            )))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not found. Running in mock mode.");
            tracing::info!("To enable real responses, set: GEMINI_API_KEY");
            None
        }
    };

    let emotion_engine = emotion::EmotionEngine::new();
    tracing::info!("Emotion engine initialized (face classifier: placeholder)");

    let bind_addr = app_config.bind_addr;
    let shared_state = Arc::new(AppState {
        config: app_config,
        gemini_client,
        emotion_engine,
    });

    // Build our application with all routes and shared state
    let app = Router::new()
        .merge(handlers::system::system_routes())
        .merge(handlers::chat::chat_routes())
        .merge(handlers::analyze::analyze_routes())
        .route("/api/status", axum::routing::get(handlers::system::api_status))
        .layer(axum::middleware::from_fn(
            middleware::logging::request_logging_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(Extension(shared_state));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!(
        "listening on {}",
        listener.local_addr().expect("listener has no local addr")
    );
    axum::serve(listener, app)
        .await
        .expect("server error");
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,empa_backend=trace,reqwest=info,hyper=info,tower=info".to_string()
        } else {
            "info,empa_backend=info,reqwest=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    // JSON logging for log aggregation, human-readable otherwise
    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("EmpaAI backend starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Build mode: {}",
        if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        }
    );

    let gemini_configured = std::env::var("GEMINI_API_KEY").is_ok();
    tracing::info!(
        "Configuration - Gemini AI: {}",
        if gemini_configured { "configured" } else { "missing (mock mode)" }
    );

    Ok(())
}
