//! Document reading and front matter handling.
//!
//! A [`Document`] is the raw text of one markdown file split into an optional
//! YAML front matter block and a body. Documents are immutable once read and
//! the [`DocumentStore`] re-reads them from disk on every request, so there is
//! no cache to invalidate and no write-back path.

use crate::{CampaignError, CampaignResult, CoreConfig};
use pulldown_cmark::{html, Parser};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Front matter metadata: a flat map of string keys to JSON values.
pub type FrontMatter = BTreeMap<String, serde_json::Value>;

/// One markdown document, split into front matter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    front_matter: FrontMatter,
    body: String,
}

impl Document {
    /// Split raw file content into front matter and body.
    ///
    /// Front matter is a `---`-fenced YAML block at the very start of the
    /// file (a UTF-8 BOM is tolerated). Absent or invalid front matter yields
    /// an empty map and the full text as body.
    pub fn parse(name: impl Into<String>, raw: &str) -> Self {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        if let Some((front_matter, body)) = split_front_matter(raw) {
            if let Some(parsed) = parse_front_matter(front_matter) {
                return Self {
                    name: name.into(),
                    front_matter: parsed,
                    body: body.to_string(),
                };
            }
        }

        Self {
            name: name.into(),
            front_matter: FrontMatter::new(),
            body: raw.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render the body to HTML.
    pub fn html(&self) -> String {
        let parser = Parser::new(&self.body);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

/// Split `raw` into (front matter, body) if it starts with a `---` fence.
fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let rest = raw
        .strip_prefix("---\r\n")
        .or_else(|| raw.strip_prefix("---\n"))?;

    for fence in ["\n---\n", "\n---\r\n"] {
        if let Some(end) = rest.find(fence) {
            return Some((&rest[..end], &rest[end + fence.len()..]));
        }
    }

    // Closing fence at end of file with no trailing newline.
    if let Some(front) = rest.strip_suffix("\n---") {
        return Some((front, ""));
    }

    None
}

/// Parse a YAML front matter block into a string-keyed JSON map.
///
/// Returns `None` when the block is not a mapping or fails to parse, so the
/// caller can fall back to treating the whole file as body.
fn parse_front_matter(block: &str) -> Option<FrontMatter> {
    let value: serde_yaml::Value = serde_yaml::from_str(block).ok()?;
    let json = serde_json::to_value(value).ok()?;

    match json {
        serde_json::Value::Object(map) => Some(map.into_iter().collect()),
        _ => None,
    }
}

/// Reads documents from the configured docs directory.
///
/// Stateless apart from the config handle; every read goes to disk.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    cfg: Arc<CoreConfig>,
}

impl DocumentStore {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Read and parse a named document.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::FileRead` if the file is missing or unreadable.
    pub fn read(&self, name: &str) -> CampaignResult<Document> {
        let path = self.cfg.document_path(name);
        let raw = std::fs::read_to_string(&path).map_err(CampaignError::FileRead)?;
        Ok(Document::parse(name, &raw))
    }
}
