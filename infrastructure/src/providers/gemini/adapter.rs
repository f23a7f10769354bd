//! Gemini gateway adapter
//!
//! One `GeminiGateway` holds the credential and the shared HTTP client;
//! sessions bind a model name to it. Each `send` is a single
//! `generateContent` round trip carrying the fixed generation parameters.

use super::types::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use conversa_application::{GatewayError, GenerationParams, LlmGateway, LlmSession};
use conversa_domain::{Model, truncate_chars};
use tracing::{debug, info};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// How much of an API error body to surface in the error message.
const ERROR_BODY_PREVIEW_CHARS: usize = 800;

pub struct GeminiGateway {
    http: reqwest::Client,
    api_key: String,
    params: GenerationParams,
}

impl GeminiGateway {
    /// Create a gateway from an API credential.
    ///
    /// The client deliberately sets no overall request timeout: a
    /// `generateContent` call waits as long as the model takes.
    pub fn new(
        api_key: impl Into<String>,
        params: GenerationParams,
    ) -> Result<Self, GatewayError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GatewayError::MissingCredential);
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            params,
        })
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        info!("Creating Gemini session for {}", model);
        Ok(Box::new(GeminiSession {
            http: self.http.clone(),
            api_key: self.api_key.clone(),
            model: model.clone(),
            params: self.params.clone(),
        }))
    }
}

/// An active Gemini session bound to one model.
pub struct GeminiSession {
    http: reqwest::Client,
    api_key: String,
    model: Model,
    params: GenerationParams,
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );
        let request = GenerateRequest::single_user_turn(prompt, &self.params);

        debug!("Sending generateContent request ({} bytes)", prompt.len());

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.trim();
            let message = if body.is_empty() {
                status.to_string()
            } else {
                format!("{}: {}", status, truncate_chars(body, ERROR_BODY_PREVIEW_CHARS))
            };
            return Err(GatewayError::Api(message));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Api(format!("malformed response: {}", e)))?;

        body.text().ok_or(GatewayError::EmptyResponse)
    }
}
