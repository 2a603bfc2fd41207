//! Pre-parse cleanup of editor HTML
//!
//! Rich-text editors pad content with no-break spaces, which have no useful
//! meaning in the exported document. They are collapsed to plain spaces before
//! parsing. The normalizer also decides which paragraph segmentation policy the
//! converter applies (see [`crate::formats::wml`]).

/// Editor HTML after cleanup, plus the segmentation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMarkup {
    pub html: String,
    /// Whether the source contains at least one explicit `<p>` opening tag.
    pub has_paragraphs: bool,
}

const NBSP_ENTITIES: &[&str] = &["&nbsp;", "&#160;", "&#xa0;", "&#xA0;"];

/// Collapse no-break spaces and detect explicit paragraphs.
pub fn normalize(source: &str) -> NormalizedMarkup {
    let mut html = source.replace('\u{a0}', " ");
    for entity in NBSP_ENTITIES {
        if html.contains(entity) {
            html = html.replace(entity, " ");
        }
    }
    let has_paragraphs = has_paragraph_tag(&html);
    NormalizedMarkup {
        html,
        has_paragraphs,
    }
}

/// Case-insensitive check for a `<p>` opening tag.
///
/// Only `<p` followed by `>`, `/` or whitespace counts, so `<pre>` and
/// `<param>` do not switch the converter into paragraph mode.
pub fn has_paragraph_tag(html: &str) -> bool {
    let bytes = html.as_bytes();
    let mut from = 0;
    while let Some(offset) = html[from..].find('<') {
        let at = from + offset;
        if matches!(bytes.get(at + 1), Some(b'p' | b'P')) {
            match bytes.get(at + 2) {
                Some(b'>' | b'/') => return true,
                Some(c) if c.is_ascii_whitespace() => return true,
                _ => {}
            }
        }
        from = at + 1;
    }
    false
}
