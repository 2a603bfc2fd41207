//! Deeply nested input
//!
//! Pasted content can nest far deeper than anything an editor produces by
//! hand. Conversion must still finish and keep the text.

use crate::common::{assert_well_formed, paragraph_count, visible_text};
use collate_wml::formats::html::MAX_DEPTH;
use collate_wml::html_to_wml;

fn nested(tag: &str, levels: usize, inner: &str) -> String {
    format!(
        "{}{inner}{}",
        format!("<{tag}>").repeat(levels),
        format!("</{tag}>").repeat(levels)
    )
}

#[test]
fn test_fifty_thousand_nested_spans() {
    let wml = html_to_wml(&nested("span", 50_000, "deep"));
    assert_well_formed(&wml);
    assert_eq!(paragraph_count(&wml), 1);
    assert_eq!(visible_text(&wml), "deep");
}

#[test]
fn test_nested_spans_inside_paragraph() {
    let html = format!("<p>{}</p><p>after</p>", nested("span", 50_000, "deep"));
    let wml = html_to_wml(&html);
    assert_well_formed(&wml);
    assert_eq!(paragraph_count(&wml), 2);
    assert_eq!(visible_text(&wml), "deepafter");
}

#[test]
fn test_formatting_survives_below_depth_limit() {
    let html = nested("span", MAX_DEPTH - 2, "<b>kept</b>");
    assert!(html_to_wml(&html).contains("<w:b/>"));
}

#[test]
fn test_formatting_beyond_depth_limit_becomes_text() {
    let html = nested("span", MAX_DEPTH + 10, "<b>flat</b>");
    let wml = html_to_wml(&html);
    assert!(!wml.contains("<w:b/>"));
    assert_eq!(visible_text(&wml), "flat");
}
