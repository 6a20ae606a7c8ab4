//! Open Packaging Convention (OPC) implementation
//!
//! This module writes the ZIP-based package format used by DOCX files.

mod content_types;
mod package;
mod part;
mod part_uri;
mod relationships;

pub use content_types::{
    ContentTypes, CORE_PROPERTIES, MAIN_DOCUMENT, NUMBERING, RELATIONSHIPS, STYLES, XML,
};
pub use package::Package;
pub use part::Part;
pub use part_uri::{well_known, PartUri};
pub use relationships::{rel_types, Relationship, Relationships};
