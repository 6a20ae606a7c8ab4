//! Part URI handling for OPC packages

use std::fmt;

/// Represents a URI to a part within an OPC package.
///
/// Part URIs are always absolute paths starting with '/'.
/// Example: `/word/document.xml`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartUri {
    path: String,
}

impl PartUri {
    /// Part names are fixed at compile time, see [`well_known`]
    pub(crate) fn from_static(path: &'static str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    /// Get the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Path of this part inside the ZIP archive (no leading '/')
    pub fn zip_path(&self) -> &str {
        &self.path[1..]
    }

    /// Get the file name portion
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("")
    }

    /// Get the parent directory path ("" for parts at the package root)
    pub fn parent(&self) -> &str {
        match self.path.rfind('/') {
            Some(pos) => &self.path[..pos],
            None => "",
        }
    }

    /// Get the relationships URI for this part.
    ///
    /// For `/word/document.xml`, returns `/word/_rels/document.xml.rels`
    pub fn relationships_uri(&self) -> PartUri {
        PartUri {
            path: format!("{}/_rels/{}.rels", self.parent(), self.file_name()),
        }
    }

    /// Target of this part as written into a `.rels` file whose source part
    /// lives in `source_dir`. Parts outside that directory get an absolute target.
    pub fn relative_to(&self, source_dir: &str) -> String {
        if source_dir.is_empty() {
            return self.zip_path().to_string();
        }
        match self.path.strip_prefix(&format!("{}/", source_dir)) {
            Some(rest) => rest.to_string(),
            None => self.path.clone(),
        }
    }
}

impl fmt::Display for PartUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Well-known part URIs
pub mod well_known {
    use super::PartUri;

    pub fn document() -> PartUri {
        PartUri::from_static("/word/document.xml")
    }

    pub fn styles() -> PartUri {
        PartUri::from_static("/word/styles.xml")
    }

    pub fn numbering() -> PartUri {
        PartUri::from_static("/word/numbering.xml")
    }

    pub fn core_props() -> PartUri {
        PartUri::from_static("/docProps/core.xml")
    }
}
