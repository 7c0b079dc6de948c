//! Per-document heading index.
//!
//! Repeated substring search with hard-coded start/end marker pairs is
//! brittle: a duplicated heading resolves to the wrong occurrence and every
//! caller has to know which heading follows which. The outline is computed
//! once per document and gives named-section lookup structural bounds: a
//! section runs from its heading to the next heading of the same or a higher
//! level.

use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)$").unwrap());

/// One heading in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of `#` characters.
    pub level: usize,
    /// Heading text with the hashes and surrounding whitespace stripped.
    pub title: String,
    /// Byte offset of the start of the heading line.
    pub start: usize,
}

/// Flat ordered list of a document's headings with byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutline {
    headings: Vec<Heading>,
}

impl DocumentOutline {
    /// Scan `content` for heading lines.
    pub fn parse(content: &str) -> Self {
        let headings = HEADING_RE
            .captures_iter(content)
            .map(|cap| {
                let whole = cap.get(0).unwrap();
                Heading {
                    level: cap[1].len(),
                    title: cap[2].trim().to_string(),
                    start: whole.start(),
                }
            })
            .collect();

        Self { headings }
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Look up the section whose heading title starts with `marker`.
    ///
    /// The section begins at the heading line and ends just before the next
    /// heading with the same or a higher level (a level-2 section is not
    /// terminated by its own level-4 subsections). Returns an empty string
    /// when no heading matches, mirroring the silent-empty behaviour of
    /// [`crate::parser::extract_section`].
    ///
    /// `content` must be the same text this outline was parsed from.
    pub fn named_section<'a>(&self, content: &'a str, marker: &str) -> &'a str {
        let Some(pos) = self
            .headings
            .iter()
            .position(|h| h.title.starts_with(marker))
        else {
            return "";
        };

        let heading = &self.headings[pos];
        let end = self.headings[pos + 1..]
            .iter()
            .find(|h| h.level <= heading.level)
            .map(|h| h.start)
            .unwrap_or(content.len());

        content[heading.start..end].trim()
    }
}
