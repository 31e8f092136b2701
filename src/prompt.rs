// prompt.rs - Emotion-aware prompt construction for the language model
use serde::{Deserialize, Serialize};

/// Label used when a signal is missing from the request.
pub const DEFAULT_EMOTION_LABEL: &str = "Neutral";

/// The face/voice/text emotion labels attached to a chat request. All fields
/// are free-form strings and interpolated verbatim; no label validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmotionContext {
    pub face: Option<String>,
    pub voice: Option<String>,
    pub text: Option<String>,
}

impl EmotionContext {
    pub fn face_label(&self) -> &str {
        self.face.as_deref().unwrap_or(DEFAULT_EMOTION_LABEL)
    }

    pub fn voice_label(&self) -> &str {
        self.voice.as_deref().unwrap_or(DEFAULT_EMOTION_LABEL)
    }

    pub fn text_label(&self) -> &str {
        self.text.as_deref().unwrap_or(DEFAULT_EMOTION_LABEL)
    }
}

/// Persona and behavioral rules as data, so the template exists exactly once
/// and alternative personas only swap the fields.
#[derive(Debug, Clone)]
pub struct Persona {
    pub name: &'static str,
    pub framing: &'static str,
    pub analysis_rules: &'static [&'static str],
    pub response_guidelines: &'static [&'static str],
}

pub const EMPA: Persona = Persona {
    name: "EmpaAI",
    framing: "You are EmpaAI, a highly emotionally intelligent and empathetic companion. \
Your goal is not just to answer, but to understand, validate, and support the user's emotional state.",
    analysis_rules: &[
        "**Detect Mismatches**: If the user's words do not match their facial or vocal signals \
(e.g. they say \"I'm fine\" but look sad or sound shaky), gently surface the discrepancy \
(e.g. \"You say you're fine, but you seem a bit down...\").",
        "**Identify Sarcasm**: If the words are positive (e.g. \"Great, just what I needed\") but the \
face or voice reads angry or annoyed, treat it as sarcasm and respond to the underlying \
frustration, not the literal words.",
        "**Empathy First**: Always validate the user's feelings before offering solutions. Use warm, \
human language. Avoid robotic phrases like \"I detect that you are feeling...\"; say \
\"That sounds really hard\" or \"I'm so sorry you're going through this\" instead.",
        "**Crisis Support**: If the signals indicate deep distress or the user mentions harm, \
prioritize emotional support, stay calm, and gently suggest professional help without being \
directive.",
    ],
    response_guidelines: &[
        "Tone: warm, safe, non-judgmental.",
        "Length: short and conversational (1-3 sentences), unless a deeper explanation is asked for.",
        "Match the user's energy: calm for stress, enthusiastic for happiness.",
        "Ask a gentle follow-up question to help them open up.",
    ],
};

/// Pure prompt assembly: persona framing, the literal user message, the three
/// emotion signals (missing fields default to "Neutral"), then the fixed
/// analysis rules and response guidelines. Deterministic for any input.
pub fn build_prompt(user_text: &str, emotion_context: &EmotionContext, persona: &Persona) -> String {
    let mut prompt = String::with_capacity(1024 + user_text.len());

    prompt.push_str(persona.framing);
    prompt.push_str("\n\n### Real-time Interaction Signals\n");
    prompt.push_str(&format!("The user just said: \"{}\"\n", user_text));

    prompt.push_str("\n### Detected Emotional Context\n");
    prompt.push_str(&format!(
        "- Facial Expression: {}\n",
        emotion_context.face_label()
    ));
    prompt.push_str(&format!(
        "- Voice/Vocal Energy: {}\n",
        emotion_context.voice_label()
    ));
    prompt.push_str(&format!(
        "- Text Sentiment: {}\n",
        emotion_context.text_label()
    ));

    prompt.push_str("\n### Analysis Instructions\n");
    for (i, rule) in persona.analysis_rules.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, rule));
    }

    prompt.push_str("\n### Response Guidelines\n");
    for guideline in persona.response_guidelines {
        prompt.push_str(&format!("- {}\n", guideline));
    }

    prompt.push_str(&format!("\nReply now as {}:", persona.name));
    prompt
}
