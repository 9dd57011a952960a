//! Office Open XML (.docx) serializer
//!
//! Writes the minimal WordprocessingML package: content types, package
//! relationships, the main document part and a styles part carrying the
//! document-wide default font. Entries use a fixed timestamp so identical
//! documents produce identical archives.

use crate::config::RenderConfig;
use crate::document::RenderedDocument;
use crate::error::SerializeError;
use crate::serializers::DocumentSerializer;
use crate::template::Block;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const PACKAGE_RELS_PART: &str = "_rels/.rels";
const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
    r#"</Types>"#,
);

const PACKAGE_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#,
);

const DOCUMENT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    r#"</Relationships>"#,
);

/// Word document serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxSerializer;

impl DocumentSerializer for DocxSerializer {
    fn serialize(&self, document: &RenderedDocument) -> Result<Vec<u8>, SerializeError> {
        for (index, block) in document.blocks().iter().enumerate() {
            check_text(index, &block.text)?;
        }

        let body = document_xml(document.blocks(), document.layout())?;
        let styles = styles_xml(document.layout())?;

        package(&[
            (CONTENT_TYPES_PART, CONTENT_TYPES.as_bytes()),
            (PACKAGE_RELS_PART, PACKAGE_RELS.as_bytes()),
            (DOCUMENT_PART, body.as_slice()),
            (STYLES_PART, styles.as_slice()),
            (DOCUMENT_RELS_PART, DOCUMENT_RELS.as_bytes()),
        ])
    }

    fn extension(&self) -> &'static str {
        "docx"
    }

    fn media_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }
}

/// Reject characters XML 1.0 cannot carry
fn check_text(block: usize, text: &str) -> Result<(), SerializeError> {
    let invalid = text.chars().find(|&c| {
        matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
    });
    match invalid {
        Some(c) => Err(SerializeError::InvalidCharacter {
            block,
            codepoint: u32::from(c),
        }),
        None => Ok(()),
    }
}

/// Event writer for one package part
struct XmlPart {
    writer: Writer<Vec<u8>>,
    part: &'static str,
}

impl XmlPart {
    fn new(part: &'static str) -> Result<Self, SerializeError> {
        let mut xml = Self {
            writer: Writer::new(Vec::new()),
            part,
        };
        xml.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(xml)
    }

    fn emit(&mut self, event: Event<'_>) -> Result<(), SerializeError> {
        self.writer
            .write_event(event)
            .map_err(|e| SerializeError::xml(self.part, e))
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), SerializeError> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.emit(Event::Start(start))
    }

    fn close(&mut self, name: &str) -> Result<(), SerializeError> {
        self.emit(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), SerializeError> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.emit(Event::Empty(start))
    }

    fn text(&mut self, text: &str) -> Result<(), SerializeError> {
        self.emit(Event::Text(BytesText::new(text)))
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn document_xml(blocks: &[Block], layout: &RenderConfig) -> Result<Vec<u8>, SerializeError> {
    let mut xml = XmlPart::new(DOCUMENT_PART)?;
    xml.open("w:document", &[("xmlns:w", WORDML_NS), ("xmlns:r", RELATIONSHIPS_NS)])?;
    xml.open("w:body", &[])?;

    for block in blocks {
        paragraph(&mut xml, block)?;
    }
    section_properties(&mut xml, layout)?;

    xml.close("w:body")?;
    xml.close("w:document")?;
    Ok(xml.finish())
}

fn paragraph(xml: &mut XmlPart, block: &Block) -> Result<(), SerializeError> {
    xml.open("w:p", &[])?;
    xml.open("w:r", &[])?;
    if block.bold {
        xml.open("w:rPr", &[])?;
        xml.empty("w:b", &[])?;
        xml.empty("w:bCs", &[])?;
        xml.close("w:rPr")?;
    }
    for _ in 0..block.breaks {
        xml.empty("w:br", &[])?;
    }
    xml.open("w:t", &[("xml:space", "preserve")])?;
    xml.text(&block.text)?;
    xml.close("w:t")?;
    xml.close("w:r")?;
    xml.close("w:p")
}

fn section_properties(xml: &mut XmlPart, layout: &RenderConfig) -> Result<(), SerializeError> {
    let page = &layout.page;
    let orient = if page.width > page.height {
        "landscape"
    } else {
        "portrait"
    };
    let width = page.width.to_string();
    let height = page.height.to_string();
    let top = page.margins.top.to_string();
    let right = page.margins.right.to_string();
    let bottom = page.margins.bottom.to_string();
    let left = page.margins.left.to_string();

    xml.open("w:sectPr", &[])?;
    xml.empty(
        "w:pgSz",
        &[
            ("w:w", width.as_str()),
            ("w:h", height.as_str()),
            ("w:orient", orient),
        ],
    )?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", top.as_str()),
            ("w:right", right.as_str()),
            ("w:bottom", bottom.as_str()),
            ("w:left", left.as_str()),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.close("w:sectPr")
}

fn styles_xml(layout: &RenderConfig) -> Result<Vec<u8>, SerializeError> {
    let family = layout.font.family.as_str();
    let size = layout.font.size_half_points.to_string();

    let mut xml = XmlPart::new(STYLES_PART)?;
    xml.open("w:styles", &[("xmlns:w", WORDML_NS)])?;

    xml.open("w:docDefaults", &[])?;
    xml.open("w:rPrDefault", &[])?;
    xml.open("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[
            ("w:ascii", family),
            ("w:eastAsia", family),
            ("w:hAnsi", family),
            ("w:cs", family),
        ],
    )?;
    xml.empty("w:sz", &[("w:val", size.as_str())])?;
    xml.empty("w:szCs", &[("w:val", size.as_str())])?;
    xml.close("w:rPr")?;
    xml.close("w:rPrDefault")?;
    xml.empty("w:pPrDefault", &[])?;
    xml.close("w:docDefaults")?;

    xml.open(
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    xml.empty("w:name", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.close("w:style")?;

    xml.close("w:styles")?;
    Ok(xml.finish())
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

fn package(parts: &[(&str, &[u8])]) -> Result<Vec<u8>, SerializeError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in parts {
        zip.start_file(*name, entry_options())?;
        zip.write_all(bytes)?;
    }
    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Margins;
    use crate::template::TemplateKind;
    use contract_test_utils::{docx_part, docx_part_names, docx_plain_text};

    fn document(blocks: Vec<Block>, layout: RenderConfig) -> RenderedDocument {
        RenderedDocument::new(TemplateKind::Regular, blocks, layout)
    }

    fn sample() -> RenderedDocument {
        document(
            vec![
                Block::line("Artist/vendor name: Jane Doe", 1),
                Block::heading("Summary:"),
                Block::line("Price and currency: $5000 USD", 2),
            ],
            RenderConfig::default(),
        )
    }

    #[test]
    fn package_has_all_parts() {
        let bytes = DocxSerializer.serialize(&sample()).unwrap();
        let names = docx_part_names(&bytes);
        for part in [
            CONTENT_TYPES_PART,
            PACKAGE_RELS_PART,
            DOCUMENT_PART,
            STYLES_PART,
            DOCUMENT_RELS_PART,
        ] {
            assert!(names.iter().any(|n| n == part), "missing {part}");
        }
    }

    #[test]
    fn one_paragraph_per_block() {
        let bytes = DocxSerializer.serialize(&sample()).unwrap();
        let xml = docx_part(&bytes, DOCUMENT_PART);
        assert_eq!(xml.matches("<w:p>").count(), 3);
        assert_eq!(xml.matches("<w:br/>").count(), 4);
        assert_eq!(xml.matches("<w:b/>").count(), 1);
    }

    #[test]
    fn text_round_trips_through_xml() {
        let bytes = DocxSerializer.serialize(&sample()).unwrap();
        let text = docx_plain_text(&bytes);
        assert!(text.contains("Artist/vendor name: Jane Doe"));
        assert!(text.contains("Price and currency: $5000 USD"));
    }

    #[test]
    fn markup_in_values_is_escaped() {
        let doc = document(
            vec![Block::line("Artist/vendor name: <Jane & \"Co\">", 1)],
            RenderConfig::default(),
        );
        let bytes = DocxSerializer.serialize(&doc).unwrap();
        let xml = docx_part(&bytes, DOCUMENT_PART);
        assert!(!xml.contains("<Jane"));
        assert!(docx_plain_text(&bytes).contains("Artist/vendor name: <Jane & \"Co\">"));
    }

    #[test]
    fn section_uses_configured_page() {
        let mut layout = RenderConfig::default();
        layout.page.margins = Margins::uniform(720);
        let bytes = DocxSerializer.serialize(&document(Vec::new(), layout)).unwrap();
        let xml = docx_part(&bytes, DOCUMENT_PART);

        assert!(xml.contains(r#"<w:pgSz w:w="12240" w:h="15840" w:orient="portrait"/>"#));
        assert!(xml.contains(r#"w:top="720" w:right="720" w:bottom="720" w:left="720""#));
    }

    #[test]
    fn styles_carry_default_font() {
        let bytes = DocxSerializer.serialize(&sample()).unwrap();
        let xml = docx_part(&bytes, STYLES_PART);
        assert!(xml.contains(r#"w:ascii="Arial""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
    }

    #[test]
    fn output_is_deterministic() {
        let first = DocxSerializer.serialize(&sample()).unwrap();
        let second = DocxSerializer.serialize(&sample()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn control_character_is_rejected() {
        let doc = document(
            vec![Block::line("ok", 1), Block::line("bad\u{7}bell", 1)],
            RenderConfig::default(),
        );
        let err = DocxSerializer.serialize(&doc).unwrap_err();
        assert!(matches!(
            err,
            SerializeError::InvalidCharacter {
                block: 1,
                codepoint: 7
            }
        ));
    }

    #[test]
    fn whitespace_controls_are_allowed() {
        assert!(check_text(0, "tab\there\nnewline\r").is_ok());
    }
}
