//! Intermediate representation for rich-text content.
//!
//! Editor HTML is parsed into a DOM and then lowered into this small owned
//! tree, so the translator matches on a closed set of node kinds instead of
//! comparing tag strings.

pub mod nodes;

pub use nodes::{Element, RichNode, Tag};
