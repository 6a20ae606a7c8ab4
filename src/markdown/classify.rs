//! Line classification rules
//!
//! Each trimmed line is matched against a flat list of rules in priority
//! order; the first match wins. No state is carried between lines, so lines
//! between two fence delimiters are classified like any other line.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Heading markers with their levels. `"##### "` and deeper match none.
const HEADING_MARKERS: [(&str, u8); 4] = [("#### ", 4), ("### ", 3), ("## ", 2), ("# ", 1)];

const SEPARATOR_MARKER: &str = "---";
const FENCE_MARKER: &str = "```";
const BULLET_MARKERS: [&str; 2] = ["- ", "* "];

/// Substrings marking a diagram block or its content
const DIAGRAM_KEYWORDS: [&str; 3] = ["mermaid", "graph", "sequenceDiagram"];
/// Diagram edge syntax
const DIAGRAM_EDGES: [&str; 2] = ["-->", "->>"];
const DIAGRAM_PARTICIPANT: &str = "participant ";

/// What a single line turns into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty after trimming
    Blank,
    /// Heading with the marker and one following space removed
    Heading { level: u8, text: &'a str },
    /// Horizontal rule
    Separator,
    /// Code fence delimiter
    Fence,
    /// Bullet item text, markup not yet cleaned
    Bullet(&'a str),
    /// Numbered item text with the `N.` prefix removed, markup not yet cleaned
    Numbered(&'a str),
    /// Diagram keyword, participant or edge line
    Diagram,
    /// Plain text, markup not yet cleaned
    Text(&'a str),
}

/// Classify one line of Markdown. Surrounding whitespace is ignored.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }

    for (marker, level) in HEADING_MARKERS {
        if let Some(text) = line.strip_prefix(marker) {
            return LineKind::Heading { level, text };
        }
    }

    if line.starts_with(SEPARATOR_MARKER) {
        return LineKind::Separator;
    }

    if line.starts_with(FENCE_MARKER) {
        return LineKind::Fence;
    }

    for marker in BULLET_MARKERS {
        if let Some(text) = line.strip_prefix(marker) {
            return LineKind::Bullet(text);
        }
    }

    if let Some(prefix) = RE_NUMBERED.find(line) {
        return LineKind::Numbered(&line[prefix.end()..]);
    }

    if is_diagram_line(line) {
        return LineKind::Diagram;
    }

    LineKind::Text(line)
}

fn is_diagram_line(line: &str) -> bool {
    DIAGRAM_KEYWORDS.iter().any(|k| line.contains(k))
        || line.starts_with(DIAGRAM_PARTICIPANT)
        || DIAGRAM_EDGES.iter().any(|e| line.contains(e))
}
