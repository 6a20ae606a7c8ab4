//! Part representation for OPC packages

use crate::opc::{PartUri, Relationships};

/// A part within an OPC package
#[derive(Clone, Debug)]
pub struct Part {
    uri: PartUri,
    content_type: String,
    data: Vec<u8>,
    /// Outgoing relationships of this part (written to its `_rels/*.rels`)
    relationships: Relationships,
}

impl Part {
    /// Create a new part
    pub fn new(uri: PartUri, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            uri,
            content_type: content_type.into(),
            data,
            relationships: Relationships::new(),
        }
    }

    /// Get the part URI
    pub fn uri(&self) -> &PartUri {
        &self.uri
    }

    /// Get the content type
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the raw data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get relationships
    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// Add an outgoing relationship to another part, returning its ID
    pub fn relate_to(&mut self, target: &PartUri, rel_type: &str) -> String {
        let target = target.relative_to(self.uri.parent());
        self.relationships.add(rel_type, &target)
    }
}
