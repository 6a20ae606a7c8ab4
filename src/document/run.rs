//! Run element (w:r) - a contiguous run of text with uniform formatting

use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Run element (w:r)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Run {
    text: String,
}

impl Run {
    /// Create a new run with text
    pub fn new(text: impl Into<String>) -> Self {
        Run { text: text.into() }
    }

    /// Get the text of this run
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Write to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let text = xml::text_event(&self.text)?;
        writer.write_event(Event::Start(BytesStart::new("w:r")))?;

        let mut start = BytesStart::new("w:t");
        // Word collapses whitespace unless told otherwise
        if needs_space_preserve(&self.text) {
            start.push_attribute(("xml:space", "preserve"));
        }
        writer.write_event(Event::Start(start))?;
        writer.write_event(Event::Text(text))?;
        writer.write_event(Event::End(BytesEnd::new("w:t")))?;

        writer.write_event(Event::End(BytesEnd::new("w:r")))?;
        Ok(())
    }
}

fn needs_space_preserve(text: &str) -> bool {
    text.starts_with(char::is_whitespace)
        || text.ends_with(char::is_whitespace)
        || text.contains("  ")
}
