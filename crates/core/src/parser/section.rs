//! Marker-based section extraction.
//!
//! The original document set addresses sections by literal heading text
//! (emoji included), so this primitive is plain substring search: no nesting
//! awareness, first occurrence wins. Well-formed documents are better served
//! by [`crate::parser::outline::DocumentOutline`]; this function remains the
//! contract for markers that are not clean headings (for example a bold
//! `**Tuesday` label used as an end marker).

/// Extract the section of `content` between two heading markers.
///
/// Locates the first occurrence of `start_heading`; if absent, returns an
/// empty string. The section runs to the first occurrence of `end_heading` at
/// or after the start, or to the end of the document when `end_heading` is
/// `None` or not found. The returned slice is trimmed and includes the start
/// heading text itself.
pub fn extract_section(content: &str, start_heading: &str, end_heading: Option<&str>) -> String {
    let Some(start) = content.find(start_heading) else {
        return String::new();
    };

    let end = end_heading
        .and_then(|marker| content[start..].find(marker).map(|i| start + i))
        .unwrap_or(content.len());

    content[start..end].trim().to_string()
}
