//! Paginated-document renderer: one landscape page per slide, visually
//! matching the archive output. This format has no hex colors, no
//! anchored text boxes, and no automatic wrapping, so color components,
//! line breaks, and centering are all computed here by hand.

use std::io::BufWriter;

use printpdf::*;

use super::color;
use super::layout::{self, HAlign, SlideGeometry, TextFrame, VAnchor};
use super::RenderError;
use crate::models::slide::Slide;

/// A4-landscape width; height chosen to keep the 16:9 canvas ratio.
const PAGE_W: f32 = 297.0;
const PAGE_H: f32 = 167.0625;
const MM_PER_UNIT: f32 = PAGE_W / layout::CANVAS_W;

const PT_TO_MM: f32 = 0.352_778;
/// Average Helvetica glyph advance relative to the point size; used for
/// wrap estimation and centering.
const GLYPH_ASPECT: f32 = 0.5;
const LINE_SPACING: f32 = 1.25;
/// Baseline offset from the top of a line of text.
const ASCENT: f32 = 0.8;

/// Placeholder boxes sit at fixed page coordinates (x, y-from-top, w, h
/// in mm) rather than the archive renderer's proportional frames, an
/// accepted cross-format approximation.
const PANEL_BOX: (f32, f32, f32, f32) = (20.0, 40.0, 100.0, 100.0);
const ACCENT_BOX: (f32, f32, f32, f32) = (14.0, 33.0, 60.0, 60.0);

const FALLBACK_TITLE: &str = "Presentation";

fn mm(units: f32) -> f32 {
    units * MM_PER_UNIT
}

/// Render the whole deck into a single in-memory document.
///
/// Callers guarantee a non-empty deck; pages follow input order, the
/// first slide drawing on the document's initial page.
pub fn render(slides: &[Slide]) -> Result<Vec<u8>, RenderError> {
    let title = slides
        .first()
        .map(|s| s.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TITLE);

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_W), Mm(PAGE_H), "Slide 1");
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    for (i, slide) in slides.iter().enumerate() {
        let geom = layout::resolve(slide, i + 1);
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) =
                doc.add_page(Mm(PAGE_W), Mm(PAGE_H), format!("Slide {}", i + 1));
            doc.get_page(page).get_layer(layer)
        };
        draw_page(&layer, &geom, &bold, &regular);
    }

    let mut buf = Vec::new();
    {
        let mut writer = BufWriter::new(&mut buf);
        doc.save(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
    }
    Ok(buf)
}

fn draw_page(
    layer: &PdfLayerReference,
    geom: &SlideGeometry,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
) {
    fill_rect(layer, 0.0, 0.0, PAGE_W, PAGE_H, geom.background.rgb());

    if geom.picture.is_some() {
        let panel = color::Color::resolve(Some(layout::PANEL_COLOR));
        let (x, y, w, h) = PANEL_BOX;
        fill_rect(layer, x, y, w, h, panel.rgb());
        // half-opacity tint emulated by blending toward the panel color
        let (x, y, w, h) = ACCENT_BOX;
        fill_rect(layer, x, y, w, h, geom.background.blend(&panel).rgb());
    }

    layer.set_fill_color(rgb_color((255, 255, 255)));
    if let Some(ref title) = geom.title {
        draw_text(layer, title, bold);
    }
    if let Some(ref body) = geom.body {
        draw_text(layer, body, regular);
    }
    draw_text(layer, &geom.number, regular);
}

/// Solid rectangle; x/y measured from the top-left page corner, flipped
/// here to the document's bottom-left origin.
fn fill_rect(layer: &PdfLayerReference, x: f32, y_top: f32, w: f32, h: f32, rgb: (u8, u8, u8)) {
    layer.set_fill_color(rgb_color(rgb));
    let rect = Rect::new(Mm(x), Mm(PAGE_H - y_top - h), Mm(x + w), Mm(PAGE_H - y_top))
        .with_mode(path::PaintMode::Fill);
    layer.add_rect(rect);
}

fn rgb_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

/// Wrap to the frame width, then place each line per the frame's
/// horizontal alignment and vertical anchor.
fn draw_text(layer: &PdfLayerReference, tf: &TextFrame, font: &IndirectFontRef) {
    let line_h = tf.size * PT_TO_MM * LINE_SPACING;
    let frame_w = mm(tf.frame.w);
    let lines = wrap(&tf.text, max_chars(frame_w, tf.size));
    let block_h = lines.len() as f32 * line_h;

    let frame_top = mm(tf.frame.y);
    let ascent = tf.size * PT_TO_MM * ASCENT;
    let first_baseline = match tf.anchor {
        VAnchor::Middle => frame_top + (mm(tf.frame.h) - block_h) / 2.0 + ascent,
        VAnchor::Top => frame_top + ascent,
    };

    for (i, line) in lines.iter().enumerate() {
        let x = match tf.align {
            HAlign::Left => mm(tf.frame.x),
            HAlign::Center => {
                mm(tf.frame.x) + (frame_w - est_width(line, tf.size)) / 2.0
            }
        };
        let baseline = first_baseline + i as f32 * line_h;
        layer.use_text(line.clone(), tf.size, Mm(x), Mm(PAGE_H - baseline), font);
    }
}

fn est_width(line: &str, size_pt: f32) -> f32 {
    line.chars().count() as f32 * size_pt * GLYPH_ASPECT * PT_TO_MM
}

fn max_chars(width_mm: f32, size_pt: f32) -> usize {
    let char_w = size_pt * GLYPH_ASPECT * PT_TO_MM;
    ((width_mm / char_w).floor() as usize).max(1)
}

/// Greedy word wrap; words longer than the limit get a line to
/// themselves rather than being split.
fn wrap(text: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.chars().count() + 1 + word.chars().count() <= limit {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_limit() {
        let lines = wrap("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("hello world", 40), vec!["hello world"]);
    }

    #[test]
    fn wrap_gives_oversized_words_their_own_line() {
        let lines = wrap("a supercalifragilistic b", 10);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn unit_conversion_spans_the_page() {
        assert!((mm(layout::CANVAS_W) - PAGE_W).abs() < 1e-3);
        assert!((mm(layout::CANVAS_H) - PAGE_H).abs() < 1e-2);
    }

    #[test]
    fn max_chars_narrows_with_wider_glyphs() {
        assert!(max_chars(100.0, 44.0) < max_chars(100.0, 20.0));
        assert!(max_chars(0.1, 44.0) >= 1);
    }
}
