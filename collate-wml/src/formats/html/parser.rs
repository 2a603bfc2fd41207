//! HTML parsing (editor HTML → rich-text tree)
//!
//! Pipeline: HTML string → html5ever → RcDom → [`RichNode`] tree.
//!
//! The fragment is wrapped in a minimal document so html5ever places it in
//! `<body>`; the body's children become the top-level nodes. Comments,
//! doctypes and processing instructions are dropped.
//!
//! Elements nested deeper than [`MAX_DEPTH`] are collapsed to a single text
//! node holding their text content, so everything downstream works on a tree
//! of bounded depth.

use crate::ir::nodes::{Element, RichNode};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::trace;

/// Element depth below `<body>` at which subtrees collapse to their text.
pub const MAX_DEPTH: usize = 128;

/// Parse an HTML fragment into its top-level rich-text nodes.
///
/// html5ever recovers from any malformed input, so this never fails.
pub fn parse_fragment(html: &str) -> Vec<RichNode> {
    let wrapped = format!("<!DOCTYPE html><html><head></head><body>{html}</body></html>");
    let dom = parse_document(RcDom::default(), Default::default()).one(wrapped.as_str());

    let Some(body) = find_body(&dom.document) else {
        return Vec::new();
    };
    let children = body.children.borrow();
    lower_children(&children, 0)
}

fn find_body(node: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data {
        if name.local.as_ref().eq_ignore_ascii_case("body") {
            return Some(node.clone());
        }
    }
    node.children.borrow().iter().find_map(find_body)
}

fn lower_children(children: &[Handle], depth: usize) -> Vec<RichNode> {
    children
        .iter()
        .filter_map(|child| lower_node(child, depth))
        .collect()
}

fn lower_node(handle: &Handle, depth: usize) -> Option<RichNode> {
    match &handle.data {
        NodeData::Text { contents } => Some(RichNode::Text(clean_text(&contents.borrow()))),
        NodeData::Element { .. } if depth >= MAX_DEPTH => {
            trace!(depth, "collapsing deeply nested markup to text");
            Some(RichNode::Text(collect_text(handle)))
        }
        NodeData::Element { name, attrs, .. } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            let children = lower_children(&handle.children.borrow(), depth + 1);
            Some(RichNode::Element(Element::new(&name.local, attrs, children)))
        }
        NodeData::Document
        | NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => None,
    }
}

/// Text of every descendant in document order, walked with an explicit stack.
fn collect_text(root: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if let NodeData::Text { contents } = &node.data {
            text.push_str(&contents.borrow());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    clean_text(&text)
}

/// Entity spellings the normalizer does not catch still decode to U+00A0.
fn clean_text(text: &str) -> String {
    text.replace('\u{a0}', " ")
}
