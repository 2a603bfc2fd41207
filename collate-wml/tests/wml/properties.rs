//! Property tests for the converter's output guarantees.

use crate::common::{assert_well_formed, paragraph_count, paragraphs, run_count, visible_text};
use collate_wml::html_to_wml;
use proptest::prelude::*;

/// Escape text the way an editor would before putting it in HTML.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn inline_fragment() -> impl Strategy<Value = String> {
    let text = "[a-zA-Z0-9 &<>'\"]{0,12}".prop_map(|t| html_escape(&t));
    let leaf = prop_oneof![
        text.clone(),
        Just("<br>".to_string()),
        text.clone().prop_map(|t| format!("<b>{t}</b>")),
        text.clone().prop_map(|t| format!("<em>{t}</em>")),
        text.clone().prop_map(|t| format!("<u>{t}</u>")),
        text.clone()
            .prop_map(|t| format!("<span style=\"background-color: yellow\">{t}</span>")),
        text.clone()
            .prop_map(|t| format!("<a href=\"https://x.test/?q={t}\">{t}</a>")),
        text.clone().prop_map(|t| format!("<ul><li>{t}</li><li>{t}</li></ul>")),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_flat_map(|parts| {
            let joined = parts.concat();
            prop_oneof![
                Just(format!("<span>{joined}</span>")),
                Just(format!("<div>{joined}</div>")),
                Just(format!("<strong>{joined}</strong>")),
                Just(joined),
            ]
        })
    })
}

proptest! {
    #[test]
    fn prop_any_input_yields_well_formed_nonempty_output(input in ".{0,80}") {
        let wml = html_to_wml(&input);
        prop_assert!(paragraph_count(&wml) >= 1);
        prop_assert!(run_count(&wml) >= 1);
        for paragraph in paragraphs(&wml) {
            prop_assert!(paragraph.contains("<w:r>"), "paragraph without a run in {}", wml);
        }
        assert_well_formed(&wml);
    }

    #[test]
    fn prop_structured_input_is_well_formed(
        parts in prop::collection::vec(inline_fragment(), 0..4),
        wrap in any::<bool>(),
    ) {
        let html = if wrap {
            parts.iter().map(|p| format!("<p>{p}</p>")).collect::<Vec<_>>().join("\n")
        } else {
            parts.concat()
        };
        let wml = html_to_wml(&html);
        prop_assert!(run_count(&wml) >= 1);
        for paragraph in paragraphs(&wml) {
            prop_assert!(paragraph.contains("<w:r>"), "paragraph without a run in {}", wml);
        }
        prop_assert!(!wml.contains("&amp;amp;"));
        assert_well_formed(&wml);
    }

    #[test]
    fn prop_text_survives_escaping_exactly_once(text in "[a-zA-Z0-9 &<>'\"]{0,40}") {
        let wml = html_to_wml(&format!("<p>{}</p>", html_escape(&text)));
        prop_assert_eq!(visible_text(&wml), text);
    }

    #[test]
    fn prop_paragraph_count_matches_tags(
        texts in prop::collection::vec("[a-z]{0,8}", 1..10),
        separator in prop_oneof![Just(""), Just("\n"), Just("  \n  ")],
    ) {
        let html = texts
            .iter()
            .map(|t| format!("<p>{t}</p>"))
            .collect::<Vec<_>>()
            .join(separator);
        let wml = html_to_wml(&html);
        prop_assert_eq!(paragraph_count(&wml), texts.len());
    }
}
