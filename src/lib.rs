// lib.rs - Exports the reusable pieces for the utility binaries
pub mod config;
pub mod emotion;
pub mod gemini_client;
pub mod prompt;

pub use config::AppConfig;
pub use emotion::{AnalysisResult, EmotionEngine};
pub use gemini_client::{GeminiClient, TextGenerator};
pub use prompt::{build_prompt, EmotionContext};
