//! Rich-text tree → WordprocessingML runs
//!
//! One recursive dispatch over [`Tag`]. Each node appends the runs it
//! translates to; paragraph wrapping is done by the caller
//! (see [`super::convert`]), except for lists, which split the enclosing
//! paragraph per item. A paragraph closed by that split is given an empty run
//! first if nothing was written to it.

use super::runs::{
    push_hyperlink, push_run, RunStyle, BREAK_RUN, EMPTY_RUN, PARAGRAPH_BREAK, PARAGRAPH_OPEN,
};
use super::WmlOptions;
use crate::ir::nodes::{Element, RichNode, Tag};

pub(crate) struct Translator<'a> {
    options: &'a WmlOptions,
}

impl<'a> Translator<'a> {
    pub(crate) fn new(options: &'a WmlOptions) -> Self {
        Self { options }
    }

    pub(crate) fn translate(&self, node: &RichNode, out: &mut String) {
        match node {
            RichNode::Text(text) => {
                if !text.is_empty() {
                    push_run(out, text, RunStyle::Plain);
                }
            }
            RichNode::Element(el) => self.translate_element(el, node, out),
        }
    }

    pub(crate) fn translate_children(&self, el: &Element, out: &mut String) {
        for child in &el.children {
            self.translate(child, out);
        }
    }

    fn translate_element(&self, el: &Element, node: &RichNode, out: &mut String) {
        match el.tag {
            Tag::Anchor => match el.attr("href") {
                Some(href) if !href.trim().is_empty() => push_hyperlink(
                    out,
                    href.trim(),
                    &node.text_content(),
                    &self.options.hyperlink_switch,
                    &self.options.link_color,
                ),
                // No target to link to: keep the text.
                _ => push_run(out, &node.text_content(), RunStyle::Plain),
            },
            // Nested formatting is flattened to the element's text content.
            Tag::Bold => push_run(out, &node.text_content(), RunStyle::Bold),
            Tag::Italic => push_run(out, &node.text_content(), RunStyle::Italic),
            Tag::Underline => push_run(out, &node.text_content(), RunStyle::Underline),
            Tag::Span => {
                if el.has_background_color() {
                    push_run(
                        out,
                        &node.text_content(),
                        RunStyle::Highlight(&self.options.highlight_color),
                    );
                } else if !el.children.is_empty() {
                    self.translate_children(el, out);
                } else {
                    push_run(out, "", RunStyle::Plain);
                }
            }
            Tag::List { .. } => {
                for item in &el.children {
                    if let RichNode::Element(li) = item {
                        if li.tag == Tag::ListItem {
                            if out.is_empty() || out.ends_with(PARAGRAPH_OPEN) {
                                out.push_str(EMPTY_RUN);
                            }
                            out.push_str(PARAGRAPH_BREAK);
                            let before = out.len();
                            self.translate_children(li, out);
                            if out.len() == before {
                                out.push_str(EMPTY_RUN);
                            }
                        }
                    }
                }
            }
            Tag::LineBreak => out.push_str(BREAK_RUN),
            Tag::Paragraph | Tag::ListItem | Tag::Other => self.translate_children(el, out),
        }
    }
}
