//! OPC Package implementation
//!
//! Assembles parts, relationships and content types into a ZIP container

use crate::error::Result;
use crate::opc::{ContentTypes, Part, PartUri, Relationships};
use std::collections::BTreeMap;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// A write-only OPC package (ZIP-based container for DOCX)
#[derive(Debug)]
pub struct Package {
    /// All parts, ordered by URI so archives are reproducible
    parts: BTreeMap<PartUri, Part>,
    /// Package-level relationships (/_rels/.rels)
    relationships: Relationships,
    /// Content types ([Content_Types].xml)
    content_types: ContentTypes,
}

impl Package {
    /// Create a new empty package
    pub fn new() -> Self {
        Self {
            parts: BTreeMap::new(),
            relationships: Relationships::new(),
            content_types: ContentTypes::new(),
        }
    }

    /// Save the package to a file.
    ///
    /// The archive is built in memory first, so a failure never leaves a
    /// truncated file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Save the package to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(Cursor::new(&mut buf))?;
        Ok(buf)
    }

    /// Write the package to a writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options: FileOptions<()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        self.content_types.write_to(&mut zip)?;

        if !self.relationships.is_empty() {
            zip.start_file("_rels/.rels", options)?;
            self.relationships.write_to(&mut zip)?;
        }

        for (uri, part) in &self.parts {
            zip.start_file(uri.zip_path(), options)?;
            zip.write_all(part.data())?;

            if !part.relationships().is_empty() {
                let rels_uri = uri.relationships_uri();
                zip.start_file(rels_uri.zip_path(), options)?;
                part.relationships().write_to(&mut zip)?;
            }
        }

        zip.finish()?;
        Ok(())
    }

    /// Add a part to the package, replacing any part with the same URI
    pub fn add_part(&mut self, part: Part) {
        let uri = part.uri().clone();
        self.content_types.add_override(&uri, part.content_type());
        self.parts.insert(uri, part);
    }

    /// Add a package-level relationship to a part
    pub fn add_relationship(&mut self, rel_type: &str, target: &PartUri) -> String {
        self.relationships.add(rel_type, &target.relative_to(""))
    }
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::{rel_types, well_known, MAIN_DOCUMENT};
    use std::io::Read;
    use zip::ZipArchive;

    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_add_part_registers_override() {
        let mut pkg = Package::new();
        let uri = well_known::document();
        pkg.add_part(Part::new(uri, MAIN_DOCUMENT, b"<doc/>".to_vec()));

        let bytes = pkg.to_bytes().unwrap();
        assert_eq!(read_entry(&bytes, "word/document.xml"), "<doc/>");
        assert!(read_entry(&bytes, "[Content_Types].xml").contains(&format!(
            r#"<Override PartName="/word/document.xml" ContentType="{}"/>"#,
            MAIN_DOCUMENT
        )));
    }

    #[test]
    fn test_add_part_replaces_same_uri() {
        let mut pkg = Package::new();
        pkg.add_part(Part::new(well_known::styles(), MAIN_DOCUMENT, b"old".to_vec()));
        pkg.add_part(Part::new(well_known::styles(), MAIN_DOCUMENT, b"new".to_vec()));

        let bytes = pkg.to_bytes().unwrap();
        assert_eq!(entry_names(&bytes).len(), 2);
        assert_eq!(read_entry(&bytes, "word/styles.xml"), "new");
    }

    #[test]
    fn test_empty_package_is_valid_zip() {
        let bytes = Package::new().to_bytes().unwrap();
        assert_eq!(&bytes[0..2], b"PK");
        assert_eq!(entry_names(&bytes), vec!["[Content_Types].xml"]);
    }

    #[test]
    fn test_write_parts_and_relationships() {
        let mut pkg = Package::new();
        let doc_uri = well_known::document();
        let mut doc = Part::new(doc_uri.clone(), MAIN_DOCUMENT, b"<document/>".to_vec());
        doc.relate_to(&well_known::styles(), rel_types::STYLES);
        pkg.add_part(doc);
        pkg.add_relationship(rel_types::OFFICE_DOCUMENT, &doc_uri);

        let bytes = pkg.to_bytes().unwrap();
        let names = entry_names(&bytes);
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"word/document.xml".to_string()));
        assert!(names.contains(&"word/_rels/document.xml.rels".to_string()));

        let mut archive = ZipArchive::new(Cursor::new(&bytes)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        let rels = read_entry(&bytes, "word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Target="styles.xml""#));

        let root_rels = read_entry(&bytes, "_rels/.rels");
        assert!(root_rels.contains(r#"Target="word/document.xml""#));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        Package::new().save(&path).unwrap();
        assert!(path.exists());
    }
}
