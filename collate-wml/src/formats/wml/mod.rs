//! WordprocessingML output (rich-text HTML → `<w:p>` fragment)
//!
//! The fragment is spliced into a document template in place of a raw-markup
//! placeholder, so it must always be a sequence of whole paragraphs.
//!
//! # Element Mapping Table
//!
//! | IR Tag         | WML                                                         |
//! |----------------|-------------------------------------------------------------|
//! | Text           | `<w:r><w:t xml:space="preserve">…</w:t></w:r>`              |
//! | Anchor         | five-run `HYPERLINK` field (begin, instr, separate, result, end) |
//! | Bold           | run with `<w:b/>`                                           |
//! | Italic         | run with `<w:i/>`                                           |
//! | Underline      | run with `<w:u w:val="single"/>`                            |
//! | Span (bg color)| run with `<w:highlight w:val="yellow"/>`                    |
//! | List           | `</w:p><w:p>` before each list item                         |
//! | LineBreak      | `<w:r><w:br/></w:r>`                                        |
//! | other          | children only                                               |
//!
//! # Paragraph Segmentation
//!
//! Content without any `<p>` tag is flat: every top-level node goes into one
//! paragraph. Otherwise each top-level `<p>`, non-blank text node and other
//! element becomes its own paragraph, and blank text between them is dropped.
//! A paragraph whose content is empty carries one empty run, including the one
//! a list closes before its first item, and the result is never empty.
//!
//! # Lossy Conversions
//!
//! - Bold, italic, underline, highlight and link text are flattened:
//!   `<b><i>x</i></b>` exports as a bold run without italics.
//! - Nested lists are flattened into one paragraph per item of the outer list.
//! - Tables, images, alignment and colors other than highlight are dropped;
//!   their text is kept.
//! - Markup nested deeper than [`crate::formats::html::MAX_DEPTH`] elements
//!   becomes plain text.

mod runs;
mod serializer;

use crate::formats::html::{normalize, parse_fragment};
use crate::ir::nodes::{RichNode, Tag};
use serializer::Translator;
use tracing::{debug, trace};

pub use runs::{EMPTY_RUN, PARAGRAPH_CLOSE, PARAGRAPH_OPEN};

/// Knobs for the generated markup. The defaults are what Word users expect
/// from a pasted hyperlink and a highlighter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WmlOptions {
    /// Value of `w:highlight` for spans with a background color.
    pub highlight_color: String,
    /// Hex value of `w:color` for hyperlink text.
    pub link_color: String,
    /// Switch appended to the `HYPERLINK` field instruction.
    pub hyperlink_switch: String,
}

impl Default for WmlOptions {
    fn default() -> Self {
        Self {
            highlight_color: "yellow".to_string(),
            link_color: "0000FF".to_string(),
            hyperlink_switch: "\\h".to_string(),
        }
    }
}

/// Convert editor HTML to a WML paragraph fragment using default options.
pub fn html_to_wml(html: &str) -> String {
    convert(html, &WmlOptions::default())
}

/// Convert editor HTML to a WML paragraph fragment.
///
/// Total over its input: any string yields at least one paragraph.
pub fn convert(html: &str, options: &WmlOptions) -> String {
    let normalized = normalize(html);
    let nodes = parse_fragment(&normalized.html);
    debug!(
        input_len = html.len(),
        top_level_nodes = nodes.len(),
        has_paragraphs = normalized.has_paragraphs,
        "converting rich text to wml"
    );

    let translator = Translator::new(options);
    let mut out = if normalized.has_paragraphs {
        segment_paragraphs(&translator, &nodes)
    } else {
        wrap_flat(&translator, &nodes)
    };

    if out.is_empty() {
        runs::push_paragraph(&mut out, "");
    }
    out
}

/// Translate a single node without any paragraph wrapping.
pub fn translate_node(node: &RichNode, options: &WmlOptions) -> String {
    let mut out = String::new();
    Translator::new(options).translate(node, &mut out);
    out
}

fn wrap_flat(translator: &Translator<'_>, nodes: &[RichNode]) -> String {
    let mut content = String::new();
    for node in nodes {
        translator.translate(node, &mut content);
    }
    let mut out = String::new();
    runs::push_paragraph(&mut out, &content);
    out
}

fn segment_paragraphs(translator: &Translator<'_>, nodes: &[RichNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        let mut content = String::new();
        match node {
            _ if node.is_blank_text() => {
                trace!("dropping blank top-level text");
                continue;
            }
            RichNode::Text(_) => translator.translate(node, &mut content),
            RichNode::Element(el) if el.tag == Tag::Paragraph => {
                translator.translate_children(el, &mut content)
            }
            RichNode::Element(_) => translator.translate(node, &mut content),
        }
        runs::push_paragraph(&mut out, &content);
    }
    out
}
