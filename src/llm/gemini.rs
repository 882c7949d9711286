use serde_json::json;

use super::{parse_reply, prompts};
use crate::errors::AppError;
use crate::models::chat::ChatReply;
use crate::models::slide::Slide;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Thin client for the Gemini generateContent REST endpoint. Holds no
/// request state; one instance per request is fine.
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Reads `GEMINI_API_KEY` (required) and `GEMINI_MODEL` (optional).
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(AppError::MissingApiKey)?;
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self {
            api_key,
            model,
            http: reqwest::Client::new(),
        })
    }

    /// Ask the model for a deck. A non-empty `existing` deck switches to
    /// edit mode; it also serves as the fallback when the reply carries
    /// no usable slides.
    pub async fn generate(&self, prompt: &str, existing: &[Slide]) -> Result<ChatReply, AppError> {
        let system = if existing.is_empty() {
            prompts::create_prompt()
        } else {
            let current = serde_json::to_string_pretty(existing)
                .map_err(|e| AppError::Llm(e.to_string()))?;
            prompts::edit_prompt(&current, existing.len())
        };
        let full_prompt = format!("{system}\n\nUser request: {prompt}");

        let url = format!("{API_BASE}/{}:generateContent?key={}", self.model, self.api_key);
        let body = json!({ "contents": [{ "parts": [{ "text": full_prompt }] }] });

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(AppError::Llm(format!("gemini http {status}: {detail}")));
        }

        let payload: serde_json::Value =
            resp.json().await.map_err(|e| AppError::Llm(e.to_string()))?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default();
        log::debug!("gemini reply ({} chars)", text.len());

        Ok(parse_reply(text, existing))
    }
}
