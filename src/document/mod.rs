//! Document model - high-level API for building DOCX documents

mod body;
mod numbering;
mod paragraph;
mod properties;
mod run;
mod section;
mod styles;

pub use body::Body;
pub use numbering::{ListDefinition, NumberFormat, Numbering};
pub use paragraph::{
    Justification, Paragraph, ParagraphProperties, ParagraphStyle, MAX_HEADING_LEVEL,
};
pub use properties::CoreProperties;
pub use run::Run;
pub use section::{Length, PageMargins, SectionProperties};
pub use styles::{HeadingFormat, StyleSheet};

use crate::error::Result;
use crate::opc::{self, rel_types, well_known, Package, Part};
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::path::Path;

/// A DOCX document under construction
#[derive(Debug, Default)]
pub struct Document {
    body: Body,
    styles: StyleSheet,
    numbering: Numbering,
    properties: CoreProperties,
}

impl Document {
    /// Create a new empty document (US Letter, 1 inch margins)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page margins
    pub fn set_margins(&mut self, margins: PageMargins) {
        self.body.section.margins = margins;
    }

    /// Get the page margins
    pub fn margins(&self) -> &PageMargins {
        &self.body.section.margins
    }

    /// Get core properties
    pub fn properties(&self) -> &CoreProperties {
        &self.properties
    }

    /// Set the document title stored in the core properties
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.properties.title = Some(title.into());
    }

    /// Add a heading paragraph (level 1-4)
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> Result<&mut Paragraph> {
        let style = ParagraphStyle::heading(level)?;
        Ok(self.body.add_paragraph(Paragraph::with_style(text, style)))
    }

    /// Add a paragraph with text
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.body.add_paragraph(Paragraph::new(text))
    }

    /// Add a paragraph with text and a named style
    pub fn add_styled_paragraph(
        &mut self,
        text: impl Into<String>,
        style: ParagraphStyle,
    ) -> &mut Paragraph {
        self.body.add_paragraph(Paragraph::with_style(text, style))
    }

    /// Get all paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.paragraphs.iter()
    }

    /// Get paragraph count
    pub fn paragraph_count(&self) -> usize {
        self.body.paragraphs.len()
    }

    /// Get paragraph by index
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.body.paragraphs.get(index)
    }

    /// Get all text in the document
    pub fn text(&self) -> String {
        self.paragraphs()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_package()?.save(path)
    }

    /// Save the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_package()?.to_bytes()
    }

    /// Assemble the OPC package with every part the document needs
    pub fn to_package(&self) -> Result<Package> {
        let mut package = Package::new();

        let doc_uri = well_known::document();
        let mut doc_part = Part::new(
            doc_uri.clone(),
            opc::MAIN_DOCUMENT,
            serialize_document_xml(&self.body)?.into_bytes(),
        );
        doc_part.relate_to(&well_known::styles(), rel_types::STYLES);
        doc_part.relate_to(&well_known::numbering(), rel_types::NUMBERING);
        package.add_part(doc_part);

        package.add_part(Part::new(
            well_known::styles(),
            opc::STYLES,
            self.styles.to_xml(&self.numbering)?.into_bytes(),
        ));
        package.add_part(Part::new(
            well_known::numbering(),
            opc::NUMBERING,
            self.numbering.to_xml()?.into_bytes(),
        ));
        package.add_part(Part::new(
            well_known::core_props(),
            opc::CORE_PROPERTIES,
            self.properties.to_xml()?.into_bytes(),
        ));

        package.add_relationship(rel_types::OFFICE_DOCUMENT, &doc_uri);
        package.add_relationship(rel_types::CORE_PROPERTIES, &well_known::core_props());

        Ok(package)
    }
}

/// Serialize body to document.xml content
fn serialize_document_xml(body: &Body) -> Result<String> {
    xml::to_xml_string(|writer| {
        let mut doc_start = BytesStart::new("w:document");
        for (attr, value) in xml::wordprocessing_namespaces() {
            doc_start.push_attribute((attr, value));
        }
        writer.write_event(Event::Start(doc_start))?;
        body.write_to(writer)?;
        writer.write_event(Event::End(BytesEnd::new("w:document")))?;
        Ok(())
    })
}
