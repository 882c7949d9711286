//! The conversational content supplier: an LLM backend that turns a
//! free-text prompt (plus, in edit mode, the current deck) into a
//! `{thoughts, slides}` reply. The render pipeline never depends on
//! anything here beyond the `Slide` array it yields.

mod gemini;
mod prompts;

pub use gemini::GeminiClient;

use crate::models::chat::{ChatReply, Thought};
use crate::models::slide::Slide;

/// Locate the first `{ ... }` block in free text. Models are instructed
/// to return bare JSON but routinely wrap it in prose or code fences.
fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Interpret a raw model reply, falling back to the caller's existing
/// deck when the reply carries no usable JSON. Never fails: a degraded
/// reply is still a reply.
fn parse_reply(text: &str, existing: &[Slide]) -> ChatReply {
    let Some(block) = extract_json_block(text) else {
        log::warn!("supplier reply contained no JSON block");
        return ChatReply {
            thoughts: vec![Thought::normal(text)],
            slides: existing.to_vec(),
        };
    };
    match serde_json::from_str::<ChatReply>(block) {
        Ok(reply) => reply,
        Err(e) => {
            log::warn!("discarding unparsable supplier JSON: {e}");
            ChatReply {
                thoughts: vec![Thought::normal(
                    "I encountered an error processing your request. Please try rephrasing.",
                )],
                slides: existing.to_vec(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(title: &str) -> Slide {
        Slide {
            title: title.to_string(),
            content: String::new(),
            layout: None,
            background_color: None,
            image: None,
        }
    }

    #[test]
    fn extracts_block_from_surrounding_prose() {
        let text = "Sure! Here is the deck:\n```json\n{\"slides\":[]}\n```\nEnjoy.";
        assert_eq!(extract_json_block(text), Some("{\"slides\":[]}"));
    }

    #[test]
    fn no_braces_means_no_block() {
        assert_eq!(extract_json_block("plain prose"), None);
        assert_eq!(extract_json_block("} reversed {"), None);
    }

    #[test]
    fn parses_well_formed_reply() {
        let reply = parse_reply(
            r##"{"thoughts":[{"role":"assistant","content":"hi","type":"normal"}],
                "slides":[{"title":"Intro","content":"","backgroundColor":"#5B6B6F","image":true}]}"##,
            &[],
        );
        assert_eq!(reply.thoughts.len(), 1);
        assert_eq!(reply.slides.len(), 1);
        assert_eq!(reply.slides[0].title, "Intro");
        assert!(reply.slides[0].wants_image());
    }

    #[test]
    fn prose_reply_keeps_existing_slides() {
        let existing = vec![slide("Keep me")];
        let reply = parse_reply("I could not produce a deck for that.", &existing);
        assert_eq!(reply.slides.len(), 1);
        assert_eq!(reply.slides[0].title, "Keep me");
        assert_eq!(reply.thoughts[0].content, "I could not produce a deck for that.");
    }

    #[test]
    fn broken_json_keeps_existing_slides() {
        let existing = vec![slide("Keep me")];
        let reply = parse_reply(r#"{"slides": [{"title": }"#, &existing);
        assert_eq!(reply.slides.len(), 1);
        assert_eq!(reply.slides[0].title, "Keep me");
    }

    #[test]
    fn missing_arrays_default_to_empty() {
        let reply = parse_reply(r#"{"thoughts":[]}"#, &[]);
        assert!(reply.slides.is_empty());
    }
}
