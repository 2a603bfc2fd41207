//! Format implementations
//!
//! `html` reads editor content into the rich-text tree, `wml` writes that tree
//! as WordprocessingML paragraphs.

pub mod common;
pub mod html;
pub mod wml;

pub use wml::{convert, html_to_wml, translate_node, WmlOptions};
