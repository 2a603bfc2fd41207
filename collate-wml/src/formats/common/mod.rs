//! Shared helpers for markup output

/// Escape the five XML special characters.
///
/// Input is treated as literal text: an existing entity such as `&amp;` is
/// escaped again (`&amp;amp;`), so callers must pass decoded text only once.
/// Characters that XML 1.0 does not allow at all (C0 controls other than tab,
/// newline and carriage return, U+FFFE, U+FFFF) are dropped.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if !is_xml_char(c) => {}
            _ => out.push(ch),
        }
    }
    out
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
