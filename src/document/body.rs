//! Document body and block-level content

use crate::document::{Paragraph, SectionProperties};
use crate::error::Result;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Document body (w:body)
#[derive(Clone, Debug, Default)]
pub struct Body {
    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
    /// Section properties (the body's trailing sectPr)
    pub section: SectionProperties,
}

impl Body {
    /// Append a paragraph and return a handle to it
    pub fn add_paragraph(&mut self, para: Paragraph) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(para);
        &mut self.paragraphs[index]
    }

    /// Write body to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:body")))?;

        for para in &self.paragraphs {
            para.write_to(writer)?;
        }
        self.section.write_to(writer)?;

        writer.write_event(Event::End(BytesEnd::new("w:body")))?;
        Ok(())
    }
}
