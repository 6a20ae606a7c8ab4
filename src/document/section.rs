//! Section properties (w:sectPr): page size and margins

use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

const TWIPS_PER_INCH: f64 = 1440.0;
const TWIPS_PER_POINT: f64 = 20.0;
const TWIPS_PER_CM: f64 = TWIPS_PER_INCH / 2.54;

/// A length, stored in twentieths of a point (twips)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Length(i32);

impl Length {
    pub const fn twips(twips: i32) -> Self {
        Length(twips)
    }

    pub fn inches(inches: f64) -> Self {
        Length((inches * TWIPS_PER_INCH).round() as i32)
    }

    pub fn pt(points: f64) -> Self {
        Length((points * TWIPS_PER_POINT).round() as i32)
    }

    pub fn cm(cm: f64) -> Self {
        Length((cm * TWIPS_PER_CM).round() as i32)
    }

    pub fn as_twips(&self) -> i32 {
        self.0
    }
}

/// Page margins
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMargins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl PageMargins {
    /// Same margin on all four sides
    pub fn uniform(margin: Length) -> Self {
        PageMargins {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        PageMargins::uniform(Length::inches(1.0))
    }
}

/// Section properties of the document's single section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionProperties {
    pub page_width: Length,
    pub page_height: Length,
    pub margins: PageMargins,
    /// Distance of header and footer from the page edge
    pub header_footer: Length,
}

impl Default for SectionProperties {
    /// US Letter, portrait
    fn default() -> Self {
        SectionProperties {
            page_width: Length::twips(12240),
            page_height: Length::twips(15840),
            margins: PageMargins::default(),
            header_footer: Length::twips(720),
        }
    }
}

impl SectionProperties {
    /// Write to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;

        let w = self.page_width.as_twips().to_string();
        let h = self.page_height.as_twips().to_string();
        xml::write_empty(writer, "w:pgSz", &[("w:w", w.as_str()), ("w:h", h.as_str())])?;

        let m = &self.margins;
        let top = m.top.as_twips().to_string();
        let right = m.right.as_twips().to_string();
        let bottom = m.bottom.as_twips().to_string();
        let left = m.left.as_twips().to_string();
        let hf = self.header_footer.as_twips().to_string();
        xml::write_empty(
            writer,
            "w:pgMar",
            &[
                ("w:top", top.as_str()),
                ("w:right", right.as_str()),
                ("w:bottom", bottom.as_str()),
                ("w:left", left.as_str()),
                ("w:header", hf.as_str()),
                ("w:footer", hf.as_str()),
                ("w:gutter", "0"),
            ],
        )?;

        writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
        Ok(())
    }
}
