//! HTML input (editor content → rich-text tree)
//!
//! # Library Choice
//!
//! We use `html5ever` + `markup5ever_rcdom` for parsing. Editor output is not
//! guaranteed to be well formed, and html5ever applies the browser recovery
//! rules, so unclosed tags, stray end tags and unknown elements all still yield
//! a tree. The DOM is lowered into [`crate::ir::RichNode`] right away; nothing
//! downstream touches RcDom handles.
//!
//! # Element Mapping Table
//!
//! | HTML                  | IR Tag                 |
//! |-----------------------|------------------------|
//! | `p`                   | `Tag::Paragraph`       |
//! | `a`                   | `Tag::Anchor`          |
//! | `b`, `strong`         | `Tag::Bold`            |
//! | `i`, `em`             | `Tag::Italic`          |
//! | `u`                   | `Tag::Underline`       |
//! | `span`                | `Tag::Span`            |
//! | `ol` / `ul`           | `Tag::List { ordered }`|
//! | `li`                  | `Tag::ListItem`        |
//! | `br`                  | `Tag::LineBreak`       |
//! | anything else         | `Tag::Other`           |

mod normalize;
mod parser;

pub use normalize::{has_paragraph_tag, normalize, NormalizedMarkup};
pub use parser::{parse_fragment, MAX_DEPTH};
