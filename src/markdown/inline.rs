//! Inline markup removal: bold, inline code and links

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static RE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").unwrap());
static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").unwrap());

/// Which markup to strip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InlineMode {
    /// `**bold**` and `` `code` `` (list items)
    EmphasisAndCode,
    /// Also `[label](url)` (plain paragraphs)
    WithLinks,
}

/// Strip inline markup, keeping the enclosed content. Unmatched markers
/// are left as they are.
pub fn clean_inline(text: &str, mode: InlineMode) -> String {
    let text = RE_BOLD.replace_all(text, "$1");
    let text = RE_CODE.replace_all(&text, "$1").into_owned();
    match mode {
        InlineMode::EmphasisAndCode => text,
        InlineMode::WithLinks => RE_LINK.replace_all(&text, "$1").into_owned(),
    }
}
