//! Numbering definitions (numbering.xml)
//!
//! Only the two single-level lists backing the "List Bullet" and
//! "List Number" styles are defined. Every paragraph of a list style shares
//! one numbering instance, so numbered items count up across the whole
//! document.

use crate::document::ParagraphStyle;
use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Number format (w:numFmt)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberFormat {
    /// •
    Bullet,
    /// 1, 2, 3
    Decimal,
}

impl NumberFormat {
    fn as_str(&self) -> &'static str {
        match self {
            NumberFormat::Bullet => "bullet",
            NumberFormat::Decimal => "decimal",
        }
    }

    fn level_text(&self) -> &'static str {
        match self {
            NumberFormat::Bullet => "\u{2022}",
            NumberFormat::Decimal => "%1.",
        }
    }
}

/// One list: an abstract definition plus the instance paragraphs point at
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListDefinition {
    pub abstract_num_id: u32,
    pub num_id: u32,
    pub format: NumberFormat,
    /// Paragraph style linked to this list
    pub style: ParagraphStyle,
    /// Left indentation (twips)
    pub indent: u32,
    /// Hanging indentation (twips)
    pub hanging: u32,
}

/// Numbering part content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Numbering {
    lists: Vec<ListDefinition>,
}

impl Default for Numbering {
    fn default() -> Self {
        Numbering {
            lists: vec![
                ListDefinition {
                    abstract_num_id: 0,
                    num_id: 1,
                    format: NumberFormat::Bullet,
                    style: ParagraphStyle::ListBullet,
                    indent: 360,
                    hanging: 360,
                },
                ListDefinition {
                    abstract_num_id: 1,
                    num_id: 2,
                    format: NumberFormat::Decimal,
                    style: ParagraphStyle::ListNumber,
                    indent: 360,
                    hanging: 360,
                },
            ],
        }
    }
}

impl Numbering {
    /// List definition backing a paragraph style
    pub fn for_style(&self, style: ParagraphStyle) -> Option<&ListDefinition> {
        self.lists.iter().find(|l| l.style == style)
    }

    /// Serialize to XML
    pub fn to_xml(&self) -> Result<String> {
        xml::to_xml_string(|w| self.write_body(w))
    }

    fn write_body<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut root = BytesStart::new("w:numbering");
        for (attr, value) in xml::wordprocessing_namespaces() {
            root.push_attribute((attr, value));
        }
        writer.write_event(Event::Start(root))?;

        // All abstractNum elements must precede the num elements
        for list in &self.lists {
            list.write_abstract(writer)?;
        }
        for list in &self.lists {
            let id = list.num_id.to_string();
            let mut num = BytesStart::new("w:num");
            num.push_attribute(("w:numId", id.as_str()));
            writer.write_event(Event::Start(num))?;
            xml::write_w_val(writer, "w:abstractNumId", &list.abstract_num_id.to_string())?;
            writer.write_event(Event::End(BytesEnd::new("w:num")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:numbering")))?;
        Ok(())
    }
}

impl ListDefinition {
    fn write_abstract<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let id = self.abstract_num_id.to_string();
        let mut abs = BytesStart::new("w:abstractNum");
        abs.push_attribute(("w:abstractNumId", id.as_str()));
        writer.write_event(Event::Start(abs))?;
        xml::write_w_val(writer, "w:multiLevelType", "singleLevel")?;

        let mut lvl = BytesStart::new("w:lvl");
        lvl.push_attribute(("w:ilvl", "0"));
        writer.write_event(Event::Start(lvl))?;
        xml::write_w_val(writer, "w:start", "1")?;
        xml::write_w_val(writer, "w:numFmt", self.format.as_str())?;
        xml::write_w_val(writer, "w:pStyle", &self.style.style_id())?;
        xml::write_w_val(writer, "w:lvlText", self.format.level_text())?;
        xml::write_w_val(writer, "w:lvlJc", "left")?;

        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        let left = self.indent.to_string();
        let hanging = self.hanging.to_string();
        xml::write_empty(
            writer,
            "w:ind",
            &[("w:left", left.as_str()), ("w:hanging", hanging.as_str())],
        )?;
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;

        writer.write_event(Event::End(BytesEnd::new("w:lvl")))?;
        writer.write_event(Event::End(BytesEnd::new("w:abstractNum")))?;
        Ok(())
    }
}
