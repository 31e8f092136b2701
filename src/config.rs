// config.rs - Explicit runtime configuration, built once in main and shared read-only
use std::net::SocketAddr;

pub const DEFAULT_MODEL: &str = "gemma-3-27b-it";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub model: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Builds the configuration from environment variables. A missing API key
    /// is not an error: the service starts in mock mode instead.
    pub fn from_env() -> Self {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        let bind_addr = format!("{}:{}", host, port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8000)));

        Self {
            gemini_api_key,
            model,
            bind_addr,
        }
    }

    pub fn mock_mode(&self) -> bool {
        self.gemini_api_key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_mode_tracks_api_key_presence() {
        let configured = AppConfig {
            gemini_api_key: Some("test-key".to_string()),
            model: DEFAULT_MODEL.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        };
        assert!(!configured.mock_mode());

        let unconfigured = AppConfig {
            gemini_api_key: None,
            ..configured
        };
        assert!(unconfigured.mock_mode());
    }
}
