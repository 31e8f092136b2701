// emotion.rs - Multimodal emotion analysis engine (face, voice, text)
use async_trait::async_trait;
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label set produced by the face classifier, same vocabulary the browser-side
/// expression model uses.
pub const EMOTION_LABELS: [&str; 7] = [
    "angry", "disgust", "fear", "happy", "sad", "surprise", "neutral",
];

/// Per-modality analysis outcome. Failures are reported through `error`
/// alongside a neutral label, never as a hard error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub emotion: String,
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn neutral() -> Self {
        Self {
            emotion: "neutral".to_string(),
            confidence: 0.0,
            error: None,
        }
    }

    pub fn soft_error(message: impl Into<String>) -> Self {
        Self {
            emotion: "neutral".to_string(),
            confidence: 0.0,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Face,
    Voice,
    Text,
}

#[derive(Debug, Clone)]
pub enum AnalysisPayload {
    Image(Vec<u8>),
    Audio(Vec<u8>),
    Text(String),
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("classification failed: {0}")]
    Classification(String),
}

/// One entry of a classifier's label distribution. Scores are on a 0-100 scale.
#[derive(Debug, Clone, Serialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f32,
}

/// Seam for the face-emotion model. Implementations classify an already
/// decoded image and return the full label distribution; the engine picks the
/// dominant label. Async so remote classification services can plug in.
#[async_trait]
pub trait FaceClassifier: Send + Sync {
    async fn classify(&self, image: &DynamicImage) -> Result<Vec<EmotionScore>, ClassifierError>;
}

/// Placeholder classifier used until a real face-emotion model is wired in.
/// Always produces a best-effort distribution with "neutral" dominant, even
/// when no face is present (detection enforcement disabled).
pub struct NeutralClassifier;

#[async_trait]
impl FaceClassifier for NeutralClassifier {
    async fn classify(&self, _image: &DynamicImage) -> Result<Vec<EmotionScore>, ClassifierError> {
        let scores = EMOTION_LABELS
            .iter()
            .map(|&label| EmotionScore {
                label: label.to_string(),
                score: if label == "neutral" { 94.0 } else { 1.0 },
            })
            .collect();
        Ok(scores)
    }
}

pub struct EmotionEngine {
    face_classifier: Box<dyn FaceClassifier>,
}

impl EmotionEngine {
    pub fn new() -> Self {
        Self {
            face_classifier: Box::new(NeutralClassifier),
        }
    }

    pub fn with_classifier(face_classifier: Box<dyn FaceClassifier>) -> Self {
        Self { face_classifier }
    }

    /// Uniform entry point across modalities. New modalities are added here
    /// without touching the prompt layer.
    pub async fn analyze(&self, payload: AnalysisPayload) -> AnalysisResult {
        match payload {
            AnalysisPayload::Image(bytes) => self.analyze_face(&bytes).await,
            AnalysisPayload::Audio(bytes) => self.analyze_audio(&bytes).await,
            AnalysisPayload::Text(text) => self.analyze_text(&text).await,
        }
    }

    /// Decodes the image bytes and returns the dominant emotion with its
    /// confidence. Decode and classification failures are swallowed into a
    /// neutral result carrying the error message.
    pub async fn analyze_face(&self, image_bytes: &[u8]) -> AnalysisResult {
        match self.classify_face(image_bytes).await {
            Ok(dominant) => AnalysisResult {
                emotion: dominant.label,
                confidence: dominant.score,
                error: None,
            },
            Err(e) => {
                tracing::error!("Face analysis failed: {}", e);
                AnalysisResult::soft_error(e.to_string())
            }
        }
    }

    async fn classify_face(&self, image_bytes: &[u8]) -> Result<EmotionScore, ClassifierError> {
        let image = image::load_from_memory(image_bytes)?;
        let scores = self.face_classifier.classify(&image).await?;
        scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| {
                ClassifierError::Classification("classifier returned no scores".to_string())
            })
    }

    /// Text sentiment placeholder. Real implementations must keep this result
    /// shape so the prompt layer stays interchangeable.
    pub async fn analyze_text(&self, _text: &str) -> AnalysisResult {
        AnalysisResult::neutral()
    }

    /// Audio tone placeholder, same contract as `analyze_text`.
    pub async fn analyze_audio(&self, _audio_bytes: &[u8]) -> AnalysisResult {
        AnalysisResult::neutral()
    }
}

impl Default for EmotionEngine {
    fn default() -> Self {
        Self::new()
    }
}
