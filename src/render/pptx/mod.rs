//! Presentation-archive renderer: one slide part per deck slide inside
//! a minimal OPC package.

mod package;
mod slide_xml;
mod templates;

use package::DocProps;

use super::layout;
use super::RenderError;
use crate::models::slide::Slide;

const CREATOR: &str = "deckgen AI";
const COMPANY: &str = "deckgen";
const SUBJECT: &str = "AI Generated Presentation";
const FALLBACK_TITLE: &str = "Presentation";

/// Render the whole deck into a single in-memory archive.
///
/// Callers guarantee a non-empty deck; slide parts are emitted strictly
/// in input order.
pub fn render(slides: &[Slide]) -> Result<Vec<u8>, RenderError> {
    let mut parts = Vec::with_capacity(slides.len());
    for (i, slide) in slides.iter().enumerate() {
        let geom = layout::resolve(slide, i + 1);
        parts.push(slide_xml::slide_xml(&geom)?);
    }

    let title = slides
        .first()
        .map(|s| s.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TITLE)
        .to_string();

    let props = DocProps {
        title,
        subject: SUBJECT,
        creator: CREATOR,
        company: COMPANY,
    };

    package::assemble(&parts, &props)
}
