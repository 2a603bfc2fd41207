//! WordprocessingML building blocks
//!
//! Every function here appends structural markup to `out`. User text is
//! escaped at this layer and nowhere else.

use crate::formats::common::escape_xml;

pub const PARAGRAPH_OPEN: &str = "<w:p>";
pub const PARAGRAPH_CLOSE: &str = "</w:p>";

/// Closes the current paragraph and opens the next one.
pub const PARAGRAPH_BREAK: &str = "</w:p><w:p>";

/// A run with no text, used to keep paragraphs non-empty.
pub const EMPTY_RUN: &str = "<w:r><w:t></w:t></w:r>";

pub const BREAK_RUN: &str = "<w:r><w:br/></w:r>";

/// Run-level formatting the translator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle<'a> {
    Plain,
    Bold,
    Italic,
    Underline,
    Highlight(&'a str),
    Link(&'a str),
}

impl RunStyle<'_> {
    fn push_properties(&self, out: &mut String) {
        match self {
            RunStyle::Plain => {}
            RunStyle::Bold => out.push_str("<w:rPr><w:b/></w:rPr>"),
            RunStyle::Italic => out.push_str("<w:rPr><w:i/></w:rPr>"),
            RunStyle::Underline => out.push_str("<w:rPr><w:u w:val=\"single\"/></w:rPr>"),
            RunStyle::Highlight(color) => {
                out.push_str("<w:rPr><w:highlight w:val=\"");
                out.push_str(&escape_xml(color));
                out.push_str("\"/></w:rPr>");
            }
            RunStyle::Link(color) => {
                out.push_str("<w:rPr><w:color w:val=\"");
                out.push_str(&escape_xml(color));
                out.push_str("\"/><w:u w:val=\"single\"/></w:rPr>");
            }
        }
    }
}

/// Append one text run. Whitespace is preserved explicitly.
pub fn push_run(out: &mut String, text: &str, style: RunStyle<'_>) {
    out.push_str("<w:r>");
    style.push_properties(out);
    out.push_str("<w:t xml:space=\"preserve\">");
    out.push_str(&escape_xml(text));
    out.push_str("</w:t></w:r>");
}

/// Append a hyperlink as a five-run field: begin, instruction, separate,
/// result, end.
pub fn push_hyperlink(out: &mut String, href: &str, label: &str, switch: &str, color: &str) {
    out.push_str("<w:r><w:fldChar w:fldCharType=\"begin\"/></w:r>");
    out.push_str("<w:r><w:instrText xml:space=\"preserve\"> HYPERLINK \"");
    out.push_str(&escape_xml(href));
    out.push_str("\" ");
    if !switch.is_empty() {
        out.push_str(&escape_xml(switch));
        out.push(' ');
    }
    out.push_str("</w:instrText></w:r>");
    out.push_str("<w:r><w:fldChar w:fldCharType=\"separate\"/></w:r>");
    push_run(out, label, RunStyle::Link(color));
    out.push_str("<w:r><w:fldChar w:fldCharType=\"end\"/></w:r>");
}

/// Append a complete paragraph; empty content gets a single empty run.
pub fn push_paragraph(out: &mut String, content: &str) {
    out.push_str(PARAGRAPH_OPEN);
    if content.is_empty() {
        out.push_str(EMPTY_RUN);
    } else {
        out.push_str(content);
    }
    out.push_str(PARAGRAPH_CLOSE);
}
