//! # linch-md2docx
//!
//! Line-oriented Markdown to DOCX conversion.
//!
//! ## Features
//!
//! - Headings (levels 1-4), bullet and numbered list items, separators
//! - Bold, inline code and link markup stripped from body text
//! - Code fence delimiters and Mermaid diagram lines skipped
//! - Small built-in WordprocessingML writer (styles, list numbering, margins)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linch_md2docx::{convert_file, ConvertOptions};
//!
//! convert_file("input.md", "output.docx", &ConvertOptions::default())?;
//!
//! // Or build a document by hand
//! use linch_md2docx::{Document, ParagraphStyle};
//!
//! let mut doc = Document::new();
//! doc.add_heading("Hello", 1)?;
//! doc.add_styled_paragraph("First point", ParagraphStyle::ListBullet);
//! doc.save("hello.docx")?;
//! ```

pub mod document;
pub mod error;
pub mod markdown;
pub mod opc;
pub mod xml;

pub use document::{Document, Justification, Length, PageMargins, Paragraph, ParagraphStyle};
pub use error::{Error, Result};
pub use markdown::{convert_file, convert_str, ConvertOptions, TranscodeStats, Transcoder};
