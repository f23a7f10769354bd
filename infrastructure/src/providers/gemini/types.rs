//! Wire types for the Gemini `generateContent` API.

use conversa_application::GenerationParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

impl GenerateRequest {
    /// A request carrying one user turn (the assembled prompt).
    pub fn single_user_turn(prompt: &str, params: &GenerationParams) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::from(params),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl From<&GenerationParams> for GenerationConfig {
    fn from(params: &GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// The first candidate's text parts, concatenated.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}
