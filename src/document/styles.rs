//! Built-in style sheet (styles.xml)

use crate::document::numbering::Numbering;
use crate::document::paragraph::MAX_HEADING_LEVEL;
use crate::document::ParagraphStyle;
use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Paragraph styles backed by a numbering definition
const LIST_STYLES: [ParagraphStyle; 2] = [ParagraphStyle::ListBullet, ParagraphStyle::ListNumber];

/// Character formatting of a heading style
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingFormat {
    /// Font size in half-points, None to inherit the body size
    pub size: Option<u32>,
    /// RGB hex color
    pub color: String,
    pub italic: bool,
    /// Space before the paragraph (twips)
    pub space_before: u32,
}

/// Document-wide style definitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    pub font: String,
    /// Body font size in half-points
    pub font_size: u32,
    /// Formats for Heading1 to Heading4
    pub headings: Vec<HeadingFormat>,
}

impl Default for StyleSheet {
    /// Calibri 11pt body with the classic blue Word headings
    fn default() -> Self {
        let heading = |size: Option<u32>, color: &str, italic: bool, space_before: u32| {
            HeadingFormat {
                size,
                color: color.to_string(),
                italic,
                space_before,
            }
        };
        StyleSheet {
            font: "Calibri".to_string(),
            font_size: 22,
            headings: vec![
                heading(Some(28), "365F91", false, 480),
                heading(Some(26), "4F81BD", false, 200),
                heading(None, "4F81BD", false, 200),
                heading(None, "4F81BD", true, 200),
            ],
        }
    }
}

impl StyleSheet {
    /// Serialize to XML. List styles link to their numbering definitions.
    pub fn to_xml(&self, numbering: &Numbering) -> Result<String> {
        xml::to_xml_string(|w| self.write_body(w, numbering))
    }

    fn write_body<W: Write>(&self, writer: &mut Writer<W>, numbering: &Numbering) -> Result<()> {
        let mut root = BytesStart::new("w:styles");
        for (attr, value) in xml::wordprocessing_namespaces() {
            root.push_attribute((attr, value));
        }
        writer.write_event(Event::Start(root))?;

        self.write_doc_defaults(writer)?;

        let mut normal = BytesStart::new("w:style");
        normal.push_attribute(("w:type", "paragraph"));
        normal.push_attribute(("w:default", "1"));
        normal.push_attribute(("w:styleId", "Normal"));
        writer.write_event(Event::Start(normal))?;
        xml::write_w_val(writer, "w:name", "Normal")?;
        writer.write_event(Event::Empty(BytesStart::new("w:qFormat")))?;
        writer.write_event(Event::End(BytesEnd::new("w:style")))?;

        for (level, format) in (1..=MAX_HEADING_LEVEL).zip(&self.headings) {
            write_heading_style(writer, level, format)?;
        }

        for list in LIST_STYLES.iter().filter_map(|&style| numbering.for_style(style)) {
            write_style_start(writer, list.style)?;

            writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
            writer.write_event(Event::Start(BytesStart::new("w:numPr")))?;
            xml::write_w_val(writer, "w:numId", &list.num_id.to_string())?;
            writer.write_event(Event::End(BytesEnd::new("w:numPr")))?;
            let left = list.indent.to_string();
            let hanging = list.hanging.to_string();
            xml::write_empty(
                writer,
                "w:ind",
                &[("w:left", left.as_str()), ("w:hanging", hanging.as_str())],
            )?;
            writer.write_event(Event::Empty(BytesStart::new("w:contextualSpacing")))?;
            writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;

            writer.write_event(Event::End(BytesEnd::new("w:style")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:styles")))?;
        Ok(())
    }

    fn write_doc_defaults<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let size = self.font_size.to_string();
        let font = self.font.as_str();

        writer.write_event(Event::Start(BytesStart::new("w:docDefaults")))?;

        writer.write_event(Event::Start(BytesStart::new("w:rPrDefault")))?;
        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        xml::write_empty(
            writer,
            "w:rFonts",
            &[
                ("w:ascii", font),
                ("w:eastAsia", font),
                ("w:hAnsi", font),
                ("w:cs", font),
            ],
        )?;
        xml::write_w_val(writer, "w:sz", &size)?;
        xml::write_w_val(writer, "w:szCs", &size)?;
        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        writer.write_event(Event::End(BytesEnd::new("w:rPrDefault")))?;

        writer.write_event(Event::Start(BytesStart::new("w:pPrDefault")))?;
        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        xml::write_empty(
            writer,
            "w:spacing",
            &[("w:after", "200"), ("w:line", "276"), ("w:lineRule", "auto")],
        )?;
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        writer.write_event(Event::End(BytesEnd::new("w:pPrDefault")))?;

        writer.write_event(Event::End(BytesEnd::new("w:docDefaults")))?;
        Ok(())
    }
}

/// `<w:style>` opening plus name and basedOn
fn write_style_start<W: Write>(writer: &mut Writer<W>, style: ParagraphStyle) -> Result<()> {
    let id = style.style_id();
    let mut elem = BytesStart::new("w:style");
    elem.push_attribute(("w:type", "paragraph"));
    elem.push_attribute(("w:styleId", id.as_str()));
    writer.write_event(Event::Start(elem))?;
    xml::write_w_val(writer, "w:name", &style.name())?;
    xml::write_w_val(writer, "w:basedOn", "Normal")?;
    Ok(())
}

fn write_heading_style<W: Write>(
    writer: &mut Writer<W>,
    level: u8,
    format: &HeadingFormat,
) -> Result<()> {
    write_style_start(writer, ParagraphStyle::Heading(level))?;
    xml::write_w_val(writer, "w:next", "Normal")?;
    xml::write_w_val(writer, "w:uiPriority", "9")?;
    writer.write_event(Event::Empty(BytesStart::new("w:qFormat")))?;

    writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
    writer.write_event(Event::Empty(BytesStart::new("w:keepNext")))?;
    writer.write_event(Event::Empty(BytesStart::new("w:keepLines")))?;
    let before = format.space_before.to_string();
    xml::write_empty(
        writer,
        "w:spacing",
        &[("w:before", before.as_str()), ("w:after", "0")],
    )?;
    xml::write_w_val(writer, "w:outlineLvl", &(level - 1).to_string())?;
    writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;

    writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
    writer.write_event(Event::Empty(BytesStart::new("w:b")))?;
    writer.write_event(Event::Empty(BytesStart::new("w:bCs")))?;
    if format.italic {
        writer.write_event(Event::Empty(BytesStart::new("w:i")))?;
        writer.write_event(Event::Empty(BytesStart::new("w:iCs")))?;
    }
    xml::write_w_val(writer, "w:color", &format.color)?;
    if let Some(size) = format.size {
        let size = size.to_string();
        xml::write_w_val(writer, "w:sz", &size)?;
        xml::write_w_val(writer, "w:szCs", &size)?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;

    writer.write_event(Event::End(BytesEnd::new("w:style")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles_xml() -> String {
        StyleSheet::default().to_xml(&Numbering::default()).unwrap()
    }

    #[test]
    fn test_defines_all_referenced_styles() {
        let xml = styles_xml();
        for id in [
            "Normal",
            "Heading1",
            "Heading2",
            "Heading3",
            "Heading4",
            "ListBullet",
            "ListNumber",
        ] {
            assert!(
                xml.contains(&format!(r#"w:styleId="{}""#, id)),
                "missing style {}",
                id
            );
        }
        assert!(!xml.contains(r#"w:styleId="Heading5""#));
    }

    #[test]
    fn test_heading_outline_levels() {
        let xml = styles_xml();
        assert!(xml.contains(r#"<w:name w:val="heading 1"/>"#));
        assert!(xml.contains(r#"<w:outlineLvl w:val="0"/>"#));
        assert!(xml.contains(r#"<w:outlineLvl w:val="3"/>"#));
        assert!(xml.contains(r#"<w:color w:val="365F91"/>"#));
    }

    #[test]
    fn test_list_styles_link_numbering() {
        let xml = styles_xml();
        let bullet = xml.find(r#"w:styleId="ListBullet""#).unwrap();
        let number = xml.find(r#"w:styleId="ListNumber""#).unwrap();

        let bullet_style = &xml[bullet..number];
        assert!(bullet_style.contains(r#"<w:name w:val="List Bullet"/>"#));
        assert!(bullet_style.contains(r#"<w:numPr><w:numId w:val="1"/></w:numPr>"#));
        assert!(xml[number..].contains(r#"<w:numId w:val="2"/>"#));
    }

    #[test]
    fn test_doc_defaults_font() {
        let mut sheet = StyleSheet::default();
        sheet.font = "Arial".to_string();
        sheet.font_size = 24;
        let xml = sheet.to_xml(&Numbering::default()).unwrap();
        assert!(xml.contains(r#"w:ascii="Arial""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
    }
}
