//! Markdown to DOCX line transcoder
//!
//! The input is split into lines, every line is classified on its own
//! (see [`classify`]) and turned into at most one paragraph of the output
//! [`Document`]. Elements are appended in input order and never revisited.
//!
//! ```rust,ignore
//! use linch_md2docx::{convert_file, ConvertOptions};
//!
//! let stats = convert_file("notes.md", "notes.docx", &ConvertOptions::default())?;
//! println!("{} elements written", stats.emitted());
//! ```

mod classify;
mod inline;

pub use classify::{classify, LineKind};
pub use inline::{clean_inline, InlineMode};

use crate::document::{Document, Justification, Length, PageMargins, ParagraphStyle};
use crate::error::{Error, Result};
use log::{debug, info};
use std::path::Path;

/// Conversion settings. All fields have fixed defaults; nothing is read
/// from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Page margins of the output document
    pub margins: PageMargins,
    /// Number of underscores in a separator paragraph
    pub separator_width: usize,
    /// Center level-1 headings
    pub center_title: bool,
    /// Use the first level-1 heading as the document title property
    pub title_from_heading: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            margins: PageMargins::uniform(Length::inches(1.0)),
            separator_width: 80,
            center_title: true,
            title_from_heading: true,
        }
    }
}

/// Per-run counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    /// Lines seen, blank ones included
    pub lines: usize,
    pub blank_lines: usize,
    pub headings: usize,
    pub paragraphs: usize,
    pub bullet_items: usize,
    pub numbered_items: usize,
    pub separators: usize,
    pub skipped_fences: usize,
    pub skipped_diagram_lines: usize,
    /// Plain lines that were nothing but markup
    pub skipped_empty: usize,
}

impl TranscodeStats {
    /// Number of elements appended to the document
    pub fn emitted(&self) -> usize {
        self.headings + self.paragraphs + self.bullet_items + self.numbered_items + self.separators
    }

    /// Number of lines with content after trimming
    pub fn non_empty_lines(&self) -> usize {
        self.lines - self.blank_lines
    }
}

/// Builds a [`Document`] from Markdown text
#[derive(Clone, Debug, Default)]
pub struct Transcoder {
    options: ConvertOptions,
}

impl Transcoder {
    pub fn new(options: ConvertOptions) -> Self {
        Transcoder { options }
    }

    /// Convert Markdown text into an in-memory document
    pub fn transcode(&self, markdown: &str) -> Result<(Document, TranscodeStats)> {
        let mut doc = Document::new();
        doc.set_margins(self.options.margins);
        let mut stats = TranscodeStats::default();

        for (index, line) in markdown.split('\n').enumerate() {
            stats.lines += 1;
            self.emit(&mut doc, &mut stats, index + 1, classify(line))?;
        }

        Ok((doc, stats))
    }

    fn emit(
        &self,
        doc: &mut Document,
        stats: &mut TranscodeStats,
        line_no: usize,
        kind: LineKind<'_>,
    ) -> Result<()> {
        match kind {
            LineKind::Blank => stats.blank_lines += 1,
            LineKind::Heading { level, text } => {
                let heading = doc.add_heading(text, level)?;
                if level == 1 && self.options.center_title {
                    heading.set_alignment(Justification::Center);
                }
                if level == 1 && self.options.title_from_heading && doc.properties().title.is_none()
                {
                    doc.set_title(text);
                }
                stats.headings += 1;
            }
            LineKind::Separator => {
                doc.add_paragraph("_".repeat(self.options.separator_width));
                stats.separators += 1;
            }
            LineKind::Fence => {
                debug!("line {}: skipped fence delimiter", line_no);
                stats.skipped_fences += 1;
            }
            LineKind::Bullet(text) => {
                let text = clean_inline(text, InlineMode::EmphasisAndCode);
                doc.add_styled_paragraph(text, ParagraphStyle::ListBullet);
                stats.bullet_items += 1;
            }
            LineKind::Numbered(text) => {
                let text = clean_inline(text, InlineMode::EmphasisAndCode);
                doc.add_styled_paragraph(text, ParagraphStyle::ListNumber);
                stats.numbered_items += 1;
            }
            LineKind::Diagram => {
                debug!("line {}: skipped diagram line", line_no);
                stats.skipped_diagram_lines += 1;
            }
            LineKind::Text(text) => {
                let text = clean_inline(text, InlineMode::WithLinks);
                if text.is_empty() {
                    debug!("line {}: nothing left after removing markup", line_no);
                    stats.skipped_empty += 1;
                } else {
                    doc.add_paragraph(text);
                    stats.paragraphs += 1;
                }
            }
        }
        Ok(())
    }
}

/// Convert Markdown text and save the result to `output`.
///
/// The document is fully built and serialized before the output file is
/// created, so a failure leaves no file behind.
pub fn convert_str<P: AsRef<Path>>(
    markdown: &str,
    output: P,
    options: &ConvertOptions,
) -> Result<TranscodeStats> {
    let output = output.as_ref();
    let (doc, stats) = Transcoder::new(options.clone()).transcode(markdown)?;
    doc.save(output)?;

    info!(
        "Saved {} ({} elements from {} lines: {} headings, {} paragraphs, {} bullet items, {} numbered items, {} separators)",
        output.display(),
        stats.emitted(),
        stats.lines,
        stats.headings,
        stats.paragraphs,
        stats.bullet_items,
        stats.numbered_items,
        stats.separators
    );
    Ok(stats)
}

/// Read a UTF-8 Markdown file and convert it to a DOCX file
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<TranscodeStats> {
    let input = input.as_ref();
    let markdown = std::fs::read_to_string(input).map_err(|source| Error::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("Read {} ({} bytes)", input.display(), markdown.len());

    convert_str(&markdown, output, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn transcode(markdown: &str) -> (Document, TranscodeStats) {
        Transcoder::default().transcode(markdown).unwrap()
    }

    fn texts(doc: &Document) -> Vec<String> {
        doc.paragraphs().map(|p| p.text()).collect()
    }

    #[test]
    fn test_headings_and_alignment() {
        let (doc, stats) = transcode("# One\n## Two\n### Three\n#### Four");

        assert_eq!(texts(&doc), vec!["One", "Two", "Three", "Four"]);
        for (i, para) in doc.paragraphs().enumerate() {
            assert_eq!(para.heading_level(), Some(i as u8 + 1));
        }
        assert_eq!(doc.paragraph(0).unwrap().alignment(), Some(Justification::Center));
        assert!(doc.paragraphs().skip(1).all(|p| p.alignment().is_none()));
        assert_eq!(stats.headings, 4);
    }

    #[test]
    fn test_headings_are_not_cleaned() {
        let (doc, _) = transcode("## Use `cargo` **now**");
        assert_eq!(texts(&doc), vec!["Use `cargo` **now**"]);
    }

    #[test]
    fn test_first_title_becomes_document_title() {
        let (doc, _) = transcode("## Intro\n# Main\n# Second");
        assert_eq!(doc.properties().title.as_deref(), Some("Main"));
    }

    #[test]
    fn test_centering_can_be_disabled() {
        let options = ConvertOptions {
            center_title: false,
            ..Default::default()
        };
        let (doc, _) = Transcoder::new(options).transcode("# Title").unwrap();
        assert_eq!(doc.paragraph(0).unwrap().alignment(), None);
    }

    #[test]
    fn test_separator_width() {
        let (doc, _) = transcode("---");
        assert_eq!(texts(&doc), vec!["_".repeat(80)]);

        let options = ConvertOptions {
            separator_width: 10,
            ..Default::default()
        };
        let (doc, _) = Transcoder::new(options).transcode("***\n---").unwrap();
        assert_eq!(texts(&doc), vec!["***".to_string(), "_".repeat(10)]);
    }

    #[test]
    fn test_list_items_are_cleaned_but_keep_links() {
        let (doc, stats) = transcode("- **Bold** item with `code`\n2. see [x](http://y)");

        let bullet = doc.paragraph(0).unwrap();
        assert_eq!(bullet.text(), "Bold item with code");
        assert_eq!(bullet.style(), Some(ParagraphStyle::ListBullet));

        let numbered = doc.paragraph(1).unwrap();
        assert_eq!(numbered.text(), "see [x](http://y)");
        assert_eq!(numbered.style(), Some(ParagraphStyle::ListNumber));

        assert_eq!(stats.bullet_items, 1);
        assert_eq!(stats.numbered_items, 1);
    }

    #[test]
    fn test_empty_list_item_is_still_emitted() {
        let (doc, _) = transcode("- ****");
        assert_eq!(doc.paragraph_count(), 1);
        assert_eq!(doc.paragraph(0).unwrap().text(), "");
    }

    #[test]
    fn test_plain_paragraph_links() {
        let (doc, _) = transcode("Read [the guide](http://x) and [more](y).");
        assert_eq!(texts(&doc), vec!["Read the guide and more."]);
        assert_eq!(doc.paragraph(0).unwrap().style(), None);
    }

    #[test]
    fn test_markup_only_line_is_dropped() {
        let (doc, stats) = transcode("``\n****");
        assert_eq!(doc.paragraph_count(), 0);
        assert_eq!(stats.skipped_empty, 2);
    }

    #[test]
    fn test_mermaid_block_is_dropped() {
        let markdown = "```mermaid\ngraph TD\n    A[Start] --> B[End]\n```\nsequenceDiagram\n    participant Client\n    Client->>Server: request\nAfter.";
        let (doc, stats) = transcode(markdown);

        assert_eq!(texts(&doc), vec!["After."]);
        assert_eq!(stats.skipped_fences, 2);
        assert_eq!(stats.skipped_diagram_lines, 5);
    }

    #[test]
    fn test_code_block_content_is_not_tracked() {
        let (doc, _) = transcode("```\n# not a comment\n- flag\nlet x = 1;\n```");
        assert_eq!(texts(&doc), vec!["not a comment", "flag", "let x = 1;"]);
        assert_eq!(doc.paragraph(0).unwrap().heading_level(), Some(1));
    }

    #[test]
    fn test_crlf_input() {
        let (doc, stats) = transcode("# Title\r\n\r\ntext\r\n");
        assert_eq!(texts(&doc), vec!["Title", "text"]);
        assert_eq!(stats.blank_lines, 2);
    }

    #[test]
    fn test_end_to_end_sequence() {
        let markdown =
            "# Title\n\nSome **bold** text with [a link](http://x).\n- item one\n1. first\n---\n";
        let (doc, stats) = transcode(markdown);

        let paras: Vec<_> = doc.paragraphs().collect();
        assert_eq!(paras.len(), 5);

        assert_eq!(paras[0].text(), "Title");
        assert_eq!(paras[0].heading_level(), Some(1));
        assert_eq!(paras[0].alignment(), Some(Justification::Center));

        assert_eq!(paras[1].text(), "Some bold text with a link.");
        assert_eq!(paras[1].style(), None);

        assert_eq!(paras[2].text(), "item one");
        assert_eq!(paras[2].style(), Some(ParagraphStyle::ListBullet));

        assert_eq!(paras[3].text(), "first");
        assert_eq!(paras[3].style(), Some(ParagraphStyle::ListNumber));

        assert_eq!(paras[4].text(), "_".repeat(80));
        assert_eq!(paras[4].style(), None);

        assert_eq!(stats.emitted(), 5);
        assert_eq!(stats.non_empty_lines(), 5);
    }

    #[test]
    fn test_emitted_never_exceeds_non_empty_lines() {
        let markdown = "# a\n\n\n- b\n```\ngraph\nc\n---\n\n3. d\n**\n";
        let (doc, stats) = transcode(markdown);
        assert_eq!(stats.emitted(), doc.paragraph_count());
        assert!(stats.emitted() <= stats.non_empty_lines());
        assert_eq!(stats.lines, markdown.split('\n').count());
    }

    #[test]
    fn test_margins_follow_options() {
        let options = ConvertOptions {
            margins: PageMargins::uniform(Length::cm(2.0)),
            ..Default::default()
        };
        let (doc, _) = Transcoder::new(options).transcode("x").unwrap();
        assert_eq!(doc.margins().left, Length::cm(2.0));
    }
}
