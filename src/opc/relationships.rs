//! Relationships handling for OPC packages
//!
//! Generates `.rels` files

use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Collection of relationships, kept in insertion order
#[derive(Clone, Debug)]
pub struct Relationships {
    items: Vec<Relationship>,
    /// Next auto-generated ID number
    next_id: u32,
}

impl Default for Relationships {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

/// A single relationship
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the source part's directory
    pub target: String,
}

impl Relationships {
    /// Create empty relationships
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the `.rels` file (declaration included) to a writer
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = Writer::new(writer);
        xml::write_declaration(&mut out)?;
        self.write_body(&mut out)
    }

    fn write_body<W: Write>(&self, out: &mut Writer<W>) -> Result<()> {
        let mut rels_elem = BytesStart::new("Relationships");
        rels_elem.push_attribute(("xmlns", xml::PR));
        out.write_event(Event::Start(rels_elem))?;

        for rel in &self.items {
            xml::write_empty(
                out,
                "Relationship",
                &[
                    ("Id", rel.id.as_str()),
                    ("Type", rel.rel_type.as_str()),
                    ("Target", rel.target.as_str()),
                ],
            )?;
        }

        out.write_event(Event::End(BytesEnd::new("Relationships")))?;
        Ok(())
    }

    /// Add a relationship (auto-generates ID)
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.next_id);
        self.next_id += 1;
        self.items.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });
        id
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// Well-known relationship types
pub mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_xml(rels: &Relationships) -> String {
        let mut buf = Vec::new();
        rels.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_auto_id() {
        let mut rels = Relationships::new();
        assert!(rels.is_empty());

        let id1 = rels.add(rel_types::STYLES, "styles.xml");
        let id2 = rels.add(rel_types::NUMBERING, "numbering.xml");

        assert_eq!(id1, "rId1");
        assert_eq!(id2, "rId2");
        assert!(!rels.is_empty());
    }

    #[test]
    fn test_write_to_keeps_insertion_order() {
        let mut rels = Relationships::new();
        rels.add(rel_types::STYLES, "styles.xml");
        rels.add(rel_types::NUMBERING, "numbering.xml");

        let rels_xml = to_xml(&rels);
        assert!(rels_xml.contains(&format!(r#"<Relationships xmlns="{}">"#, xml::PR)));
        let styles = rels_xml.find(r#"Id="rId1""#).unwrap();
        let numbering = rels_xml.find(r#"Id="rId2""#).unwrap();
        assert!(styles < numbering);
        assert!(rels_xml.contains(r#"Target="numbering.xml""#));
    }
}
