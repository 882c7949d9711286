use serde::{Deserialize, Serialize};

use super::slide::Slide;
use crate::render::OutputFormat;

/// One narration entry from the content supplier. The render pipeline has
/// zero dependency on these; they exist for the chat transcript only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    #[serde(default = "assistant_role")]
    pub role: String,
    #[serde(default)]
    pub content: String,
    /// "thinking" | "action" | "normal"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_details: Option<String>,
}

fn assistant_role() -> String {
    "assistant".to_string()
}

impl Thought {
    /// Plain assistant message with no action metadata.
    pub fn normal(content: impl Into<String>) -> Self {
        Thought {
            role: assistant_role(),
            content: content.into(),
            kind: Some("normal".to_string()),
            action_details: None,
        }
    }
}

/// What the supplier returns: narration plus a slide array. Both arrays
/// may be missing, empty, or (in edit mode) a subset/superset of the
/// previous deck. Callers must not assume otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub thoughts: Vec<Thought>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// POST /api/generate body. A non-empty `slides` array switches the
/// supplier into edit mode against that deck.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// POST /api/download body.
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}
