//! Deck rendering: a single dispatch entry point over two stateless
//! format renderers. Each invocation builds a fresh in-memory document,
//! serializes it, and discards it. Nothing is shared across requests,
//! and slides are rendered strictly in input-array order.

pub mod color;
pub mod layout;
pub mod pdf;
pub mod pptx;

use std::fmt;

use serde::Deserialize;

use crate::models::slide::Slide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pptx,
    Pdf,
}

/// A finished render: one whole byte buffer plus the response metadata
/// the download endpoint needs. Never chunked or partial.
pub struct RenderedFile {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: &'static str,
}

#[derive(Debug)]
pub enum RenderError {
    /// Deck was empty; rejected before any composition work.
    EmptyDeck,
    Xml(fmt::Error),
    Zip(zip::result::ZipError),
    Io(std::io::Error),
    Pdf(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyDeck => write!(f, "empty deck"),
            RenderError::Xml(e) => write!(f, "slide XML error: {e}"),
            RenderError::Zip(e) => write!(f, "package archive error: {e}"),
            RenderError::Io(e) => write!(f, "I/O error: {e}"),
            RenderError::Pdf(e) => write!(f, "PDF composition error: {e}"),
        }
    }
}

impl From<fmt::Error> for RenderError {
    fn from(e: fmt::Error) -> Self {
        RenderError::Xml(e)
    }
}

impl From<zip::result::ZipError> for RenderError {
    fn from(e: zip::result::ZipError) -> Self {
        RenderError::Zip(e)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

/// Render a whole deck in the requested format.
///
/// The deck is validated once here; renderers may assume a non-empty
/// slice. All-or-nothing: any failure discards the buffer.
pub fn render_deck(slides: &[Slide], format: OutputFormat) -> Result<RenderedFile, RenderError> {
    if slides.is_empty() {
        return Err(RenderError::EmptyDeck);
    }
    match format {
        OutputFormat::Pptx => Ok(RenderedFile {
            bytes: pptx::render(slides)?,
            content_type:
                "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            filename: "presentation.pptx",
        }),
        OutputFormat::Pdf => Ok(RenderedFile {
            bytes: pdf::render(slides)?,
            content_type: "application/pdf",
            filename: "presentation.pdf",
        }),
    }
}
