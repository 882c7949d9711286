use serde::{Deserialize, Serialize};

/// One slide of a deck. Wire names match the browser client (camelCase).
///
/// Slides are immutable inputs to rendering: renderers only read them to
/// produce geometry and draw calls. Deck order is the only relational
/// structure; there are no IDs and no cross-references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Reserved: accepted and round-tripped, consumed by no renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Hex color, leading `#` optional. Absent/empty falls back to the
    /// default gray at resolve time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageFlag>,
}

/// The `image` field arrives as either a bool or a string; no image bytes
/// are ever carried, a truthy value only reserves a placeholder region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageFlag {
    Flag(bool),
    Text(String),
}

impl Slide {
    /// Whether a picture-placeholder region should be reserved.
    pub fn wants_image(&self) -> bool {
        match &self.image {
            Some(ImageFlag::Flag(b)) => *b,
            Some(ImageFlag::Text(s)) => !s.is_empty(),
            None => false,
        }
    }
}
