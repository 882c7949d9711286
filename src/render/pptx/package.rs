//! OPC package assembly: serialize the generated parts plus the static
//! templates into a single in-memory zip archive.

use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::templates;
use crate::render::RenderError;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Deck-level document metadata written to docProps.
pub struct DocProps {
    pub title: String,
    pub subject: &'static str,
    pub creator: &'static str,
    pub company: &'static str,
}

/// Write the complete package for the given slide XML parts, in order.
pub fn assemble(slide_parts: &[String], props: &DocProps) -> Result<Vec<u8>, RenderError> {
    let n = slide_parts.len();
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let put = |zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, data: &str| {
        zip.start_file(name, opts)?;
        zip.write_all(data.as_bytes())?;
        Ok::<(), RenderError>(())
    };

    put(&mut zip, "[Content_Types].xml", &content_types_xml(n)?)?;
    put(&mut zip, "_rels/.rels", &root_rels_xml())?;
    put(&mut zip, "docProps/core.xml", &core_props_xml(props))?;
    put(&mut zip, "docProps/app.xml", &app_props_xml(props))?;
    put(&mut zip, "ppt/presentation.xml", &presentation_xml(n)?)?;
    put(&mut zip, "ppt/_rels/presentation.xml.rels", &presentation_rels_xml(n)?)?;
    put(&mut zip, "ppt/slideMasters/slideMaster1.xml", templates::SLIDE_MASTER_XML)?;
    put(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        templates::SLIDE_MASTER_RELS_XML,
    )?;
    put(&mut zip, "ppt/slideLayouts/slideLayout1.xml", templates::SLIDE_LAYOUT_XML)?;
    put(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        templates::SLIDE_LAYOUT_RELS_XML,
    )?;
    put(&mut zip, "ppt/theme/theme1.xml", templates::THEME_XML)?;
    put(&mut zip, "ppt/presProps.xml", templates::PRES_PROPS_XML)?;
    put(&mut zip, "ppt/viewProps.xml", templates::VIEW_PROPS_XML)?;

    for (i, part) in slide_parts.iter().enumerate() {
        put(&mut zip, &format!("ppt/slides/slide{}.xml", i + 1), part)?;
        put(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
            templates::SLIDE_RELS_XML,
        )?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn content_types_xml(slide_count: usize) -> Result<String, RenderError> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    );
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(
        r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
    );
    for i in 1..=slide_count {
        write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

fn root_rels_xml() -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push_str(
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>"#,
    );
    xml.push_str(
        r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
    );
    xml.push_str(
        r#"<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>"#,
    );
    xml.push_str("</Relationships>");
    xml
}

/// presentation.xml: the master at rId1, slides from rId2 up, 16:9 size
/// (9144000 x 5143500 EMU, the 10 x 5.625 inch canvas).
fn presentation_xml(slide_count: usize) -> Result<String, RenderError> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for i in 0..slide_count {
            write!(xml, r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 2)?;
        }
        xml.push_str("</p:sldIdLst>");
    }
    xml.push_str(r#"<p:sldSz cx="9144000" cy="5143500"/>"#);
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

fn presentation_rels_xml(slide_count: usize) -> Result<String, RenderError> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push_str(
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#,
    );
    for i in 0..slide_count {
        write!(
            xml,
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            i + 2,
            i + 1,
        )?;
    }
    let next = slide_count + 2;
    write!(
        xml,
        r#"<Relationship Id="rId{next}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps" Target="presProps.xml"/>"#,
    )?;
    write!(
        xml,
        r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps" Target="viewProps.xml"/>"#,
        next + 1,
    )?;
    write!(
        xml,
        r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="theme/theme1.xml"/>"#,
        next + 2,
    )?;
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn core_props_xml(props: &DocProps) -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    );
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(&props.title)));
    xml.push_str(&format!("<dc:subject>{}</dc:subject>", escape_xml(props.subject)));
    xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(props.creator)));
    xml.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created>"#
    ));
    xml.push_str(&format!(
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified>"#
    ));
    xml.push_str("</cp:coreProperties>");
    xml
}

fn app_props_xml(props: &DocProps) -> String {
    let mut xml = String::with_capacity(384);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    );
    xml.push_str("<Application>deckgen</Application>");
    xml.push_str(&format!("<Company>{}</Company>", escape_xml(props.company)));
    xml.push_str("</Properties>");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_lists_every_slide() {
        let xml = content_types_xml(3).unwrap();
        assert!(xml.contains("/ppt/slides/slide1.xml"));
        assert!(xml.contains("/ppt/slides/slide3.xml"));
        assert!(!xml.contains("/ppt/slides/slide4.xml"));
    }

    #[test]
    fn presentation_rels_number_slides_from_rid2() {
        let xml = presentation_rels_xml(2).unwrap();
        assert!(xml.contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml""#));
        assert!(xml.contains(r#"Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide2.xml""#));
        // fixed parts continue after the last slide
        assert!(xml.contains(r#"Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps""#));
    }

    #[test]
    fn presentation_xml_keeps_slide_order() {
        let xml = presentation_xml(2).unwrap();
        let first = xml.find(r#"r:id="rId2""#).unwrap();
        let second = xml.find(r#"r:id="rId3""#).unwrap();
        assert!(first < second);
    }

    #[test]
    fn doc_props_escape_title() {
        let props = DocProps {
            title: "Q&A".to_string(),
            subject: "s",
            creator: "c",
            company: "co",
        };
        assert!(core_props_xml(&props).contains("<dc:title>Q&amp;A</dc:title>"));
    }
}
