//! List tests
//!
//! WML at this layer has no list construct, so every list item starts a new
//! paragraph.

use crate::common::{assert_well_formed, paragraphs};
use collate_wml::html_to_wml;
use insta::assert_snapshot;

#[test]
fn test_unordered_list_expansion() {
    assert_snapshot!(
        html_to_wml("<ul><li>a</li><li>b</li></ul>"),
        @r#"<w:p><w:r><w:t></w:t></w:r></w:p><w:p><w:r><w:t xml:space="preserve">a</w:t></w:r></w:p><w:p><w:r><w:t xml:space="preserve">b</w:t></w:r></w:p>"#
    );
}

#[test]
fn test_list_items_become_plain_runs() {
    let wml = html_to_wml("<ol><li>a</li><li>b</li></ol>");
    let paras = paragraphs(&wml);
    assert_eq!(
        paras,
        vec![
            "<w:r><w:t></w:t></w:r>",
            "<w:r><w:t xml:space=\"preserve\">a</w:t></w:r>",
            "<w:r><w:t xml:space=\"preserve\">b</w:t></w:r>",
        ]
    );
    assert!(!wml.contains("ol"));
    assert!(!wml.contains("li"));
}

#[test]
fn test_list_between_paragraphs() {
    let wml = html_to_wml("<p>Intro</p><ol><li data-list=\"bullet\">one</li><li>two</li></ol><p>Outro</p>");
    assert_well_formed(&wml);
    let texts: Vec<String> = paragraphs(&wml);
    assert_eq!(texts.len(), 5);
    assert!(texts[0].contains(">Intro<"));
    assert_eq!(texts[1], "<w:r><w:t></w:t></w:r>");
    assert!(texts[2].contains(">one<"));
    assert!(texts[3].contains(">two<"));
    assert!(texts[4].contains(">Outro<"));
}

#[test]
fn test_list_item_keeps_inline_formatting() {
    let wml = html_to_wml("<ul><li>pay <b>now</b></li></ul>");
    assert!(wml.ends_with(
        "<w:p><w:r><w:t xml:space=\"preserve\">pay </w:t></w:r>\
         <w:r><w:rPr><w:b/></w:rPr><w:t xml:space=\"preserve\">now</w:t></w:r></w:p>"
    ));
}

#[test]
fn test_list_inside_flat_content() {
    let wml = html_to_wml("before<ul><li>x</li></ul>after");
    assert_well_formed(&wml);
    assert_eq!(
        paragraphs(&wml),
        vec![
            "<w:r><w:t xml:space=\"preserve\">before</w:t></w:r>",
            "<w:r><w:t xml:space=\"preserve\">x</w:t></w:r>\
             <w:r><w:t xml:space=\"preserve\">after</w:t></w:r>",
        ]
    );
}

#[test]
fn test_every_list_paragraph_has_a_run() {
    for html in [
        "<ul><li>a</li></ul>",
        "<p>x</p><ol><li>a</li></ol>",
        "<p>x</p><ul><li><ul><li>deep</li></ul></li></ul>",
        "<ol><li></li><li></li></ol>",
    ] {
        let wml = html_to_wml(html);
        assert!(!wml.contains("<w:p></w:p>"), "{html} -> {wml}");
        for paragraph in paragraphs(&wml) {
            assert!(paragraph.contains("<w:r>"), "{html} -> {wml}");
        }
    }
}

#[test]
fn test_empty_list_emits_nothing_of_its_own() {
    assert_eq!(html_to_wml("<p>a</p><ul></ul>").matches("<w:p>").count(), 2);
}
