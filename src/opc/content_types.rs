//! Content Types handling for OPC packages
//!
//! Generates `[Content_Types].xml`

use crate::error::Result;
use crate::opc::PartUri;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::collections::BTreeMap;
use std::io::Write;

/// Content types definition for an OPC package
#[derive(Clone, Debug, Default)]
pub struct ContentTypes {
    /// Default extension mappings (extension -> content type)
    defaults: BTreeMap<String, String>,
    /// Override mappings (part URI -> content type)
    overrides: BTreeMap<PartUri, String>,
}

impl ContentTypes {
    /// Create a new ContentTypes with the `rels` and `xml` defaults
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.add_default("rels", RELATIONSHIPS);
        ct.add_default("xml", XML);
        ct
    }

    /// Write `[Content_Types].xml` (declaration included) to a writer
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = Writer::new(writer);
        xml::write_declaration(&mut out)?;
        self.write_body(&mut out)
    }

    fn write_body<W: Write>(&self, out: &mut Writer<W>) -> Result<()> {
        let mut types = BytesStart::new("Types");
        types.push_attribute(("xmlns", xml::CT));
        out.write_event(Event::Start(types))?;

        for (ext, content_type) in &self.defaults {
            xml::write_empty(
                out,
                "Default",
                &[("Extension", ext.as_str()), ("ContentType", content_type.as_str())],
            )?;
        }

        for (uri, content_type) in &self.overrides {
            xml::write_empty(
                out,
                "Override",
                &[("PartName", uri.as_str()), ("ContentType", content_type.as_str())],
            )?;
        }

        out.write_event(Event::End(BytesEnd::new("Types")))?;
        Ok(())
    }

    /// Add a default extension mapping
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_lowercase(), content_type.to_string());
    }

    /// Add an override for a specific part
    pub fn add_override(&mut self, uri: &PartUri, content_type: &str) {
        self.overrides.insert(uri.clone(), content_type.to_string());
    }
}

// Well-known content types
pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
pub const XML: &str = "application/xml";
pub const MAIN_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
pub const STYLES: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
pub const NUMBERING: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::well_known;

    fn to_xml(ct: &ContentTypes) -> String {
        let mut buf = Vec::new();
        ct.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_new_has_rels_and_xml_defaults() {
        let xml = to_xml(&ContentTypes::new());
        assert!(xml.contains(r#"<Default Extension="xml" ContentType="application/xml"/>"#));
        assert!(!xml.contains("<Override"));
    }

    #[test]
    fn test_default_extension_is_lowercased() {
        let mut ct = ContentTypes::new();
        ct.add_default("PNG", "image/png");
        let xml = to_xml(&ct);
        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
    }

    #[test]
    fn test_write_to() {
        let mut ct = ContentTypes::new();
        ct.add_override(&well_known::styles(), STYLES);

        let xml = to_xml(&ct);
        assert!(xml.contains(&format!(
            r#"<Default Extension="rels" ContentType="{}"/>"#,
            RELATIONSHIPS
        )));
        assert!(xml.contains(&format!(
            r#"<Override PartName="/word/styles.xml" ContentType="{}"/>"#,
            STYLES
        )));
        assert!(xml.ends_with("</Types>"));
    }
}
