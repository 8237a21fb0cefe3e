//! HTML processing utilities.
//!
//! Product descriptions arrive as catalog HTML of uneven quality, so these
//! helpers are regex-based and tolerant: unmatched or malformed markup is
//! simply left in place as plain text rather than rejected.

use std::sync::LazyLock;

use regex::Regex;

/// Regex matching any HTML tag.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Regex collapsing whitespace runs.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Regex for an H1 opening tag.
static H1_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[\s/>]").expect("valid regex"));

/// Regex capturing H2/H3 element content.
static SUBHEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h([23])[^>]*>(.*?)</h[23]\s*>").expect("valid regex"));

/// Regex for paragraph boundaries: a closing `</p>`, a double `<br>`,
/// or a blank line.
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</p\s*>|<br\s*/?>\s*<br\s*/?>|\n\s*\n").expect("valid regex")
});

/// Strip all tags from HTML, returning collapsed plain text.
///
/// Tags are replaced by a space so adjacent block elements don't fuse
/// into one word, then whitespace runs collapse to a single space.
/// A stray `<` that never closes is not a tag and stays in the text.
#[tracing::instrument(skip_all, fields(input_len = html.len()))]
pub fn strip_tags(html: &str) -> String {
    let without_tags = TAG.replace_all(html, " ");
    WHITESPACE.replace_all(&without_tags, " ").trim().to_string()
}

/// Count H1 opening tags in raw HTML.
pub fn count_h1(html: &str) -> usize {
    H1_OPEN.find_iter(html).count()
}

/// Extract the plain-text content of every H2 and H3 element, in
/// document order. Empty headings are dropped.
pub fn subheadings(html: &str) -> Vec<String> {
    SUBHEADING
        .captures_iter(html)
        .map(|cap| strip_tags(&cap[2]))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Split raw HTML into plain-text paragraphs.
///
/// Boundaries are `</p>`, a double `<br>`, or a blank line. Each piece is
/// tag-stripped; empty pieces are dropped.
pub fn split_paragraphs(html: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(html)
        .map(strip_tags)
        .filter(|p| !p.is_empty())
        .collect()
}
