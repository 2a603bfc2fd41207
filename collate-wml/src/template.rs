//! Template rendering
//!
//! Templates are WordprocessingML documents (`word/document.xml`) containing
//! placeholder tags:
//!
//! - `{@key}` is a raw-markup tag. The whole `<w:p>` that contains it is
//!   replaced by the value, which is why converted fields are always made of
//!   complete paragraphs. A raw tag outside any paragraph is replaced in place.
//! - `{key}` is a text tag, replaced by the XML-escaped value.
//!
//! Keys without a value render as empty. Tags split across runs by a word
//! processor are not recognized. Packaging the rendered XML back into a
//! `.docx` archive is left to the caller.

use crate::error::ExportError;
use crate::fields::TemplateData;
use crate::formats::common::escape_xml;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Something that turns a data dictionary into a rendered document.
pub trait TemplateEngine {
    fn render(&self, data: &TemplateData) -> Result<String, ExportError>;
}

/// Placeholder substitution over a WordprocessingML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlTemplate {
    source: String,
}

const PARAGRAPH_END: &str = "</w:p>";

impl XmlTemplate {
    /// Wrap template source, checking that it is well-formed XML.
    pub fn new(source: impl Into<String>) -> Result<Self, ExportError> {
        let source = source.into();
        check_well_formed(&source)
            .map_err(|e| ExportError::TemplateError(format!("template is not well-formed: {e}")))?;
        Ok(Self { source })
    }

    /// Read a template from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ExportError::TemplateNotFound(path.display().to_string()),
            _ => ExportError::Io(format!("{}: {err}", path.display())),
        })?;
        debug!(path = %path.display(), len = source.len(), "loaded template");
        Self::new(source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder tags in document order.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        let mut found = Vec::new();
        let mut cursor = 0;
        while let Some((start, tag)) = next_tag(&self.source, cursor) {
            cursor = start + tag.len;
            found.push(tag.placeholder);
        }
        found
    }
}

impl TemplateEngine for XmlTemplate {
    fn render(&self, data: &TemplateData) -> Result<String, ExportError> {
        let source = self.source.as_str();
        let mut out = String::with_capacity(source.len());
        let mut cursor = 0;
        // Output before this offset came from substituted values and is never
        // searched for paragraph boundaries.
        let mut settled = 0;

        while let Some((start, tag)) = next_tag(source, cursor) {
            out.push_str(&source[cursor..start]);
            cursor = start + tag.len;

            let value = data.get(&tag.placeholder.key).unwrap_or_else(|| {
                warn!(key = %tag.placeholder.key, "no value for template placeholder");
                ""
            });

            if !tag.placeholder.raw {
                out.push_str(&escape_xml(value));
                continue;
            }

            let open = open_paragraph_start(&out[settled..]).map(|offset| settled + offset);
            let close = source[cursor..].find(PARAGRAPH_END);
            match (open, close) {
                (Some(open), Some(close)) => {
                    out.truncate(open);
                    out.push_str(value);
                    cursor += close + PARAGRAPH_END.len();
                }
                _ => out.push_str(value),
            }
            settled = out.len();
        }
        out.push_str(&source[cursor..]);

        check_well_formed(&out).map_err(|e| {
            ExportError::TemplateError(format!("rendered document is not well-formed: {e}"))
        })?;
        Ok(out)
    }
}

/// A `{key}` or `{@key}` tag found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub key: String,
    pub raw: bool,
}

struct FoundTag {
    placeholder: Placeholder,
    /// Byte length of the tag including braces.
    len: usize,
}

fn next_tag(source: &str, from: usize) -> Option<(usize, FoundTag)> {
    let mut search = from;
    while let Some(offset) = source[search..].find('{') {
        let start = search + offset;
        let body_start = start + 1;
        let rest = &source[body_start..];
        let body_len = rest.find(|c| matches!(c, '{' | '}' | '<' | '>'));
        if let Some(body_len) = body_len {
            if rest[body_len..].starts_with('}') {
                let body = &rest[..body_len];
                let (raw, key) = match body.strip_prefix('@') {
                    Some(key) => (true, key.trim()),
                    None => (false, body.trim()),
                };
                if !key.is_empty() {
                    let tag = FoundTag {
                        placeholder: Placeholder {
                            key: key.to_string(),
                            raw,
                        },
                        len: body_len + 2,
                    };
                    return Some((start, tag));
                }
            }
        }
        search = body_start;
    }
    None
}

/// Offset of the `<w:p>` opening tag that is still open at the end of `text`.
fn open_paragraph_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut candidate = None;
    let mut search = 0;
    while let Some(offset) = text[search..].find("<w:p") {
        let at = search + offset;
        match bytes.get(at + 4) {
            Some(b'>') => candidate = Some(at),
            Some(c) if c.is_ascii_whitespace() => candidate = Some(at),
            _ => {}
        }
        search = at + 4;
    }
    let start = candidate?;
    if text[start..].contains(PARAGRAPH_END) {
        None
    } else {
        Some(start)
    }
}

fn check_well_formed(xml: &str) -> Result<(), roxmltree::Error> {
    roxmltree::Document::parse(xml).map(|_| ())
}
