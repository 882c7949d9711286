//! Slide part emission: resolved geometry in, one `slideN.xml` string
//! out. Coordinates arrive in fractional canvas units and convert here
//! to EMUs (914400 per unit; the canvas unit is one inch in this
//! format).

use std::fmt::Write as FmtWrite;

use crate::render::layout::{
    Frame, HAlign, PicturePlaceholder, SlideGeometry, TextFrame, VAnchor, PANEL_COLOR, TEXT_COLOR,
};

const EMU_PER_UNIT: f32 = 914_400.0;

/// Half opacity on the accent box, in OOXML alpha thousandths-of-percent.
const ACCENT_ALPHA: u32 = 50_000;

fn emu(units: f32) -> i64 {
    (units * EMU_PER_UNIT).round() as i64
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Generate the full `<p:sld>` document for one slide.
///
/// Shape IDs: 1 is the group shape, user shapes count up from 2. Order
/// matters only for z-stacking: background, placeholder boxes, then text.
pub fn slide_xml(geom: &SlideGeometry) -> Result<String, std::fmt::Error> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
    );
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    xml.push_str("<p:cSld>");

    // Background fill covers the entire canvas. Must precede spTree.
    xml.push_str("<p:bg><p:bgPr><a:solidFill>");
    write!(xml, r#"<a:srgbClr val="{}"/>"#, geom.background.hex())?;
    xml.push_str("</a:solidFill><a:effectLst/></p:bgPr></p:bg>");

    xml.push_str("<p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    let mut shape_id = 2u32;

    if let Some(ref picture) = geom.picture {
        write_placeholder(&mut xml, picture, geom, &mut shape_id)?;
    }
    if let Some(ref title) = geom.title {
        write_text_frame(&mut xml, title, &mut shape_id)?;
    }
    if let Some(ref body) = geom.body {
        write_text_frame(&mut xml, body, &mut shape_id)?;
    }
    write_text_frame(&mut xml, &geom.number, &mut shape_id)?;

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sld>");

    Ok(xml)
}

/// The dark panel plus the translucent accent box tinted with the
/// slide's background color.
fn write_placeholder(
    xml: &mut String,
    picture: &PicturePlaceholder,
    geom: &SlideGeometry,
    shape_id: &mut u32,
) -> Result<(), std::fmt::Error> {
    write_rect(xml, &picture.panel, PANEL_COLOR, None, shape_id)?;
    write_rect(
        xml,
        &picture.accent,
        geom.background.hex(),
        Some(ACCENT_ALPHA),
        shape_id,
    )
}

fn write_rect(
    xml: &mut String,
    frame: &Frame,
    fill: &str,
    alpha: Option<u32>,
    shape_id: &mut u32,
) -> Result<(), std::fmt::Error> {
    let id = *shape_id;
    *shape_id += 1;

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{id}" name="Rectangle {id}"/>"#)?;
    xml.push_str("<p:cNvSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, frame)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:solidFill>");
    match alpha {
        Some(a) => write!(xml, r#"<a:srgbClr val="{fill}"><a:alpha val="{a}"/></a:srgbClr>"#)?,
        None => write!(xml, r#"<a:srgbClr val="{fill}"/>"#)?,
    }
    xml.push_str("</a:solidFill>");
    xml.push_str("</p:spPr>");
    xml.push_str("</p:sp>");

    Ok(())
}

fn write_text_frame(
    xml: &mut String,
    tf: &TextFrame,
    shape_id: &mut u32,
) -> Result<(), std::fmt::Error> {
    let id = *shape_id;
    *shape_id += 1;

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{id}" name="Text Box {id}"/>"#)?;
    xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, &tf.frame)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    let anchor = match tf.anchor {
        VAnchor::Middle => "ctr",
        VAnchor::Top => "t",
    };
    write!(xml, r#"<a:bodyPr wrap="square" rtlCol="0" anchor="{anchor}"/>"#)?;
    xml.push_str("<a:lstStyle/>");
    xml.push_str("<a:p>");
    let algn = match tf.align {
        HAlign::Left => "l",
        HAlign::Center => "ctr",
    };
    write!(xml, r#"<a:pPr algn="{algn}"/>"#)?;
    xml.push_str("<a:r>");

    write!(xml, r#"<a:rPr lang="en-US" dirty="0" sz="{}""#, (tf.size * 100.0) as u32)?;
    if tf.bold {
        xml.push_str(r#" b="1""#);
    }
    xml.push('>');
    write!(xml, r#"<a:solidFill><a:srgbClr val="{TEXT_COLOR}"/></a:solidFill>"#)?;
    xml.push_str("</a:rPr>");

    write!(xml, "<a:t>{}</a:t>", escape_xml(&tf.text))?;
    xml.push_str("</a:r>");
    xml.push_str("</a:p>");
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");

    Ok(())
}

fn write_xfrm(xml: &mut String, frame: &Frame) -> Result<(), std::fmt::Error> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, emu(frame.x), emu(frame.y))?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, emu(frame.w), emu(frame.h))?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slide::{ImageFlag, Slide};
    use crate::render::layout::resolve;

    fn slide(title: &str, content: &str, bg: Option<&str>, image: bool) -> Slide {
        Slide {
            title: title.to_string(),
            content: content.to_string(),
            layout: None,
            background_color: bg.map(str::to_string),
            image: image.then(|| ImageFlag::Flag(true)),
        }
    }

    #[test]
    fn background_fill_uses_resolved_color() {
        let xml = slide_xml(&resolve(&slide("T", "", Some("#5B6B6F"), false), 1)).unwrap();
        assert!(xml.contains(r#"<a:srgbClr val="5B6B6F"/>"#));
    }

    #[test]
    fn placeholder_rects_only_with_image() {
        let with = slide_xml(&resolve(&slide("T", "", None, true), 1)).unwrap();
        assert!(with.contains(PANEL_COLOR));
        assert!(with.contains(r#"<a:alpha val="50000"/>"#));

        let without = slide_xml(&resolve(&slide("T", "", None, false), 1)).unwrap();
        assert!(!without.contains(PANEL_COLOR));
        assert!(!without.contains("<a:alpha"));
    }

    #[test]
    fn alignment_follows_image_branch() {
        let with = slide_xml(&resolve(&slide("T", "b", None, true), 1)).unwrap();
        assert!(with.contains(r#"<a:pPr algn="l"/>"#));

        let without = slide_xml(&resolve(&slide("T", "b", None, false), 1)).unwrap();
        assert!(without.contains(r#"<a:pPr algn="ctr"/>"#));
    }

    #[test]
    fn title_text_is_escaped() {
        let xml = slide_xml(&resolve(&slide("Q1 <Sales & Margin>", "", None, false), 1)).unwrap();
        assert!(xml.contains("<a:t>Q1 &lt;Sales &amp; Margin&gt;</a:t>"));
    }

    #[test]
    fn title_bold_and_sized_body_regular() {
        let xml = slide_xml(&resolve(&slide("T", "b", None, false), 1)).unwrap();
        assert!(xml.contains(r#"sz="4400" b="1""#));
        assert!(xml.contains(r#"sz="2000">"#));
    }

    #[test]
    fn slide_number_present_without_title_or_content() {
        let xml = slide_xml(&resolve(&slide("", "", None, false), 4)).unwrap();
        assert!(xml.contains("<a:t>4</a:t>"));
        assert!(xml.contains(r#"sz="1400""#));
    }

    #[test]
    fn emu_conversion_is_inch_based() {
        assert_eq!(emu(1.0), 914_400);
        assert_eq!(emu(0.5), 457_200);
        let xml = slide_xml(&resolve(&slide("T", "b", None, false), 1)).unwrap();
        // title frame x=1.0u with content present: y=2.0u
        assert!(xml.contains(r#"<a:off x="914400" y="1828800"/>"#));
    }
}
