//! Paragraph element (w:p)

use crate::document::Run;
use crate::error::{Error, Result};
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Highest heading level with a built-in style
pub const MAX_HEADING_LEVEL: u8 = 4;

/// Named paragraph style from the built-in style sheet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParagraphStyle {
    /// Heading 1 to Heading 4
    Heading(u8),
    /// "List Bullet"
    ListBullet,
    /// "List Number"
    ListNumber,
}

impl ParagraphStyle {
    /// Heading style for `level`, validated against the style sheet
    pub fn heading(level: u8) -> Result<Self> {
        if (1..=MAX_HEADING_LEVEL).contains(&level) {
            Ok(ParagraphStyle::Heading(level))
        } else {
            Err(Error::InvalidHeadingLevel(level))
        }
    }

    /// Style ID as referenced from `w:pStyle`
    pub fn style_id(&self) -> String {
        match self {
            ParagraphStyle::Heading(level) => format!("Heading{}", level),
            ParagraphStyle::ListBullet => "ListBullet".to_string(),
            ParagraphStyle::ListNumber => "ListNumber".to_string(),
        }
    }

    /// Display name shown in Word's style gallery
    pub fn name(&self) -> String {
        match self {
            ParagraphStyle::Heading(level) => format!("heading {}", level),
            ParagraphStyle::ListBullet => "List Bullet".to_string(),
            ParagraphStyle::ListNumber => "List Number".to_string(),
        }
    }
}

/// Paragraph justification (w:jc)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justification {
    #[default]
    Left,
    Center,
    Right,
    Both,
}

impl Justification {
    fn as_str(&self) -> &'static str {
        match self {
            Justification::Left => "left",
            Justification::Center => "center",
            Justification::Right => "right",
            Justification::Both => "both",
        }
    }
}

/// Paragraph properties (w:pPr)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParagraphProperties {
    pub style: Option<ParagraphStyle>,
    pub justification: Option<Justification>,
}

impl ParagraphProperties {
    fn is_empty(&self) -> bool {
        self.style.is_none() && self.justification.is_none()
    }

    /// Write to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        if let Some(style) = &self.style {
            xml::write_w_val(writer, "w:pStyle", &style.style_id())?;
        }
        if let Some(jc) = &self.justification {
            xml::write_w_val(writer, "w:jc", jc.as_str())?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        Ok(())
    }
}

/// Paragraph element (w:p)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub properties: ParagraphProperties,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new paragraph with text. Empty text yields a paragraph
    /// without runs.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run::new(text)]
        };
        Paragraph {
            runs,
            ..Default::default()
        }
    }

    /// Create a new paragraph with text and a named style
    pub fn with_style(text: impl Into<String>, style: ParagraphStyle) -> Self {
        let mut para = Paragraph::new(text);
        para.properties.style = Some(style);
        para
    }

    /// Get all text in this paragraph
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Get the named style, if any
    pub fn style(&self) -> Option<ParagraphStyle> {
        self.properties.style
    }

    /// Get alignment (unset means inherited from the style, i.e. left)
    pub fn alignment(&self) -> Option<Justification> {
        self.properties.justification
    }

    /// Set alignment
    pub fn set_alignment(&mut self, jc: Justification) {
        self.properties.justification = Some(jc);
    }

    /// Heading level, if this paragraph uses a heading style
    pub fn heading_level(&self) -> Option<u8> {
        match self.properties.style {
            Some(ParagraphStyle::Heading(level)) => Some(level),
            _ => None,
        }
    }

    /// Check if this is a heading
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Write to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let start = BytesStart::new("w:p");

        if self.properties.is_empty() && self.runs.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        self.properties.write_to(writer)?;
        for run in &self.runs {
            run.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:p")))?;
        Ok(())
    }
}
