//! Paragraph segmentation tests
//!
//! Flat content is wrapped in one paragraph, paragraph-bearing content gets one
//! paragraph per top-level node.

use crate::common::{paragraph_count, paragraphs, run_count};
use collate_wml::html_to_wml;
use insta::assert_snapshot;

const EMPTY_PARAGRAPH: &str = "<w:p><w:r><w:t></w:t></w:r></w:p>";

// ============================================================================
// FLAT CONTENT
// ============================================================================

#[test]
fn test_flat_content_single_paragraph() {
    assert_snapshot!(
        html_to_wml("hello <b>world</b>"),
        @r#"<w:p><w:r><w:t xml:space="preserve">hello </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">world</w:t></w:r></w:p>"#
    );
}

#[test]
fn test_empty_string() {
    assert_eq!(html_to_wml(""), EMPTY_PARAGRAPH);
}

#[test]
fn test_whitespace_only_flat_content_keeps_its_run() {
    let wml = html_to_wml("   ");
    assert_eq!(paragraph_count(&wml), 1);
    assert_eq!(run_count(&wml), 1);
}

#[test]
fn test_flat_unknown_leaf_still_has_a_run() {
    assert_eq!(html_to_wml("<img src=\"x.png\">"), EMPTY_PARAGRAPH);
}

// ============================================================================
// EXPLICIT PARAGRAPHS
// ============================================================================

#[test]
fn test_each_paragraph_tag_is_a_block() {
    let wml = html_to_wml("<p>one</p><p>two</p><p>three</p>");
    assert_eq!(paragraph_count(&wml), 3);
    assert_eq!(
        paragraphs(&wml),
        vec![
            "<w:r><w:t xml:space=\"preserve\">one</w:t></w:r>",
            "<w:r><w:t xml:space=\"preserve\">two</w:t></w:r>",
            "<w:r><w:t xml:space=\"preserve\">three</w:t></w:r>",
        ]
    );
}

#[test]
fn test_uppercase_paragraph_tags() {
    let wml = html_to_wml("<P>one</P><P>two</P>");
    assert_eq!(paragraph_count(&wml), 2);
}

#[test]
fn test_empty_paragraph_gets_empty_run() {
    let wml = html_to_wml("<p>first</p><p></p><p>third</p>");
    assert_eq!(paragraph_count(&wml), 3);
    assert_eq!(paragraphs(&wml)[1], "<w:r><w:t></w:t></w:r>");
}

#[test]
fn test_editor_blank_line() {
    // Editors represent an empty line as a paragraph holding a break.
    let wml = html_to_wml("<p>a</p><p><br></p><p>b</p>");
    assert_eq!(paragraphs(&wml)[1], "<w:r><w:br/></w:r>");
}

#[test]
fn test_stray_text_becomes_its_own_paragraph() {
    let wml = html_to_wml("<p>one</p>stray<p>two</p>");
    assert_eq!(
        paragraphs(&wml),
        vec![
            "<w:r><w:t xml:space=\"preserve\">one</w:t></w:r>",
            "<w:r><w:t xml:space=\"preserve\">stray</w:t></w:r>",
            "<w:r><w:t xml:space=\"preserve\">two</w:t></w:r>",
        ]
    );
}

#[test]
fn test_blank_stray_text_is_dropped() {
    let wml = html_to_wml("\n<p>one</p>\n   \n<p>two</p>\n");
    assert_eq!(paragraph_count(&wml), 2);
}

#[test]
fn test_other_top_level_element_is_a_block() {
    let wml = html_to_wml("<p>one</p><div>two <i>2</i></div>");
    assert_eq!(
        paragraphs(&wml),
        vec![
            "<w:r><w:t xml:space=\"preserve\">one</w:t></w:r>",
            "<w:r><w:t xml:space=\"preserve\">two </w:t></w:r>\
             <w:r><w:rPr><w:i/></w:rPr><w:t xml:space=\"preserve\">2</w:t></w:r>",
        ]
    );
}

#[test]
fn test_only_blank_paragraph_content_falls_back() {
    assert_eq!(html_to_wml("<p></p>"), EMPTY_PARAGRAPH);
    assert_eq!(html_to_wml("<p>   </p>").matches("<w:r>").count(), 1);
}

#[test]
fn test_nbsp_only_paragraph() {
    assert_eq!(
        html_to_wml("<p>&nbsp;</p>"),
        "<w:p><w:r><w:t xml:space=\"preserve\"> </w:t></w:r></w:p>"
    );
}

#[test]
fn test_paragraph_attributes_are_ignored() {
    let wml = html_to_wml("<p class=\"ql-align-center\" style=\"text-align: center\">x</p>");
    assert_eq!(wml, "<w:p><w:r><w:t xml:space=\"preserve\">x</w:t></w:r></w:p>");
}
