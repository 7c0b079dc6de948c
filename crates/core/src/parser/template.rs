//! Template document splitting.
//!
//! Template documents are sliced into a flat ordered sequence of titled
//! chunks: every heading of level 2-4 starts a chunk, and any subsequent
//! heading line (of any level) terminates it. No tree is built.

use regex::Regex;
use std::sync::LazyLock;

static SECTION_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{2,4})\s+(.+)$").unwrap());
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());

/// One titled chunk of a template document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TemplateSection {
    pub title: String,
    /// Number of `#` characters in the heading (2-4).
    pub level: usize,
    /// From the heading line to the next heading of any level, trimmed.
    pub content: String,
}

/// Slice a document into titled sections at headings of level 2-4.
pub fn extract_template_sections(content: &str) -> Vec<TemplateSection> {
    SECTION_HEADING_RE
        .captures_iter(content)
        .map(|cap| {
            let whole = cap.get(0).unwrap();
            TemplateSection {
                title: cap[2].to_string(),
                level: cap[1].len(),
                content: section_content(content, whole.start()),
            }
        })
        .collect()
}

/// First level-1 heading of the document, or "Untitled".
pub fn extract_title(content: &str) -> String {
    TITLE_RE
        .captures(content)
        .map(|cap| cap[1].to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Content from a heading's start index to the next heading line anywhere
/// later in the document, trimmed.
fn section_content(content: &str, start: usize) -> String {
    let end = content[start + 1..]
        .find("\n#")
        .map(|i| start + 1 + i)
        .unwrap_or(content.len());

    content[start..end].trim().to_string()
}
