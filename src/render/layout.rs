//! Geometry resolution, shared by both renderers.
//!
//! Positions are fractions of a 10.0 x 5.625 canvas, a 16:9 slide whose
//! width is normalized to 10 units. The resolver is a pure function; each
//! renderer converts units itself (EMU for the archive format, mm for the
//! paginated one), which keeps the two outputs visually aligned without
//! duplicating any placement logic.

use super::color::Color;
use crate::models::slide::Slide;

pub const CANVAS_W: f32 = 10.0;
pub const CANVAS_H: f32 = 5.625;

/// All text renders white on the colored background.
pub const TEXT_COLOR: &str = "FFFFFF";
/// Dark panel standing in for actual image content.
pub const PANEL_COLOR: &str = "2D2D2D";

pub const TITLE_SIZE: f32 = 44.0;
pub const BODY_SIZE: f32 = 20.0;
pub const NUMBER_SIZE: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAnchor {
    Middle,
    Top,
}

#[derive(Debug, Clone)]
pub struct TextFrame {
    pub frame: Frame,
    pub text: String,
    /// Point size, identical in both output formats.
    pub size: f32,
    pub bold: bool,
    pub align: HAlign,
    pub anchor: VAnchor,
}

/// The two overlapping rectangles reserved when a slide's image flag is
/// set: a dark panel plus a smaller accent box tinted with the slide's
/// background color at half opacity.
#[derive(Debug, Clone)]
pub struct PicturePlaceholder {
    pub panel: Frame,
    pub accent: Frame,
}

#[derive(Debug, Clone)]
pub struct SlideGeometry {
    pub background: Color,
    pub title: Option<TextFrame>,
    pub body: Option<TextFrame>,
    pub picture: Option<PicturePlaceholder>,
    pub number: TextFrame,
}

/// Resolve concrete geometry for one slide. `index` is 1-based and only
/// feeds the corner slide number.
///
/// With an image the text column is anchored to the right two-thirds and
/// left-aligned; without, it spans nearly the full width and centers.
/// The title drops from y 2.5 to y 2.0 when body text sits below it.
pub fn resolve(slide: &Slide, index: usize) -> SlideGeometry {
    let background = Color::resolve(slide.background_color.as_deref());
    let with_image = slide.wants_image();

    let (text_x, text_w, align) = if with_image {
        (5.0, 4.5, HAlign::Left)
    } else {
        (1.0, 8.5, HAlign::Center)
    };

    let title_y = if slide.content.is_empty() { 2.5 } else { 2.0 };

    let title = (!slide.title.is_empty()).then(|| TextFrame {
        frame: Frame { x: text_x, y: title_y, w: text_w, h: 1.5 },
        text: slide.title.clone(),
        size: TITLE_SIZE,
        bold: true,
        align,
        anchor: VAnchor::Middle,
    });

    let body = (!slide.content.is_empty()).then(|| TextFrame {
        frame: Frame { x: text_x, y: 3.8, w: text_w, h: 1.0 },
        text: slide.content.clone(),
        size: BODY_SIZE,
        bold: false,
        align,
        anchor: VAnchor::Top,
    });

    let picture = with_image.then(|| PicturePlaceholder {
        panel: Frame { x: 0.8, y: 1.5, w: 3.5, h: 3.5 },
        accent: Frame { x: 0.5, y: 1.2, w: 2.0, h: 2.0 },
    });

    let number = TextFrame {
        frame: Frame { x: 0.5, y: 5.0, w: 1.0, h: 0.4 },
        text: index.to_string(),
        size: NUMBER_SIZE,
        bold: false,
        align: HAlign::Left,
        anchor: VAnchor::Top,
    };

    SlideGeometry { background, title, body, picture, number }
}
