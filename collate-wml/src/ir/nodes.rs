//! Core data structures for the rich-text tree.

/// A node in the rich-text tree produced from editor HTML.
#[derive(Debug, Clone, PartialEq)]
pub enum RichNode {
    Text(String),
    Element(Element),
}

/// An element with its classified tag, attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    /// Lowercased tag name as it appeared in the source.
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<RichNode>,
}

/// The closed set of element kinds the translator recognizes.
///
/// Every other tag name maps to [`Tag::Other`], which the translator treats as
/// a transparent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Paragraph,
    Anchor,
    Bold,
    Italic,
    Underline,
    Span,
    List { ordered: bool },
    ListItem,
    LineBreak,
    Other,
}

impl Tag {
    /// Classify a (case-insensitive) HTML tag name.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "p" => Tag::Paragraph,
            "a" => Tag::Anchor,
            "b" | "strong" => Tag::Bold,
            "i" | "em" => Tag::Italic,
            "u" => Tag::Underline,
            "span" => Tag::Span,
            "ol" => Tag::List { ordered: true },
            "ul" => Tag::List { ordered: false },
            "li" => Tag::ListItem,
            "br" => Tag::LineBreak,
            _ => Tag::Other,
        }
    }
}

impl Element {
    pub fn new(name: &str, attrs: Vec<(String, String)>, children: Vec<RichNode>) -> Self {
        let name = name.to_ascii_lowercase();
        Element {
            tag: Tag::from_name(&name),
            name,
            attrs,
            children,
        }
    }

    /// Look up an attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the inline `style` attribute declares a background color.
    pub fn has_background_color(&self) -> bool {
        self.attr("style")
            .map(|style| style.to_ascii_lowercase().contains("background-color"))
            .unwrap_or(false)
    }
}

impl RichNode {
    pub fn text(text: impl Into<String>) -> Self {
        RichNode::Text(text.into())
    }

    pub fn element(name: &str, attrs: Vec<(String, String)>, children: Vec<RichNode>) -> Self {
        RichNode::Element(Element::new(name, attrs, children))
    }

    /// Concatenated text of this node and all its descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            RichNode::Text(text) => out.push_str(text),
            RichNode::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// True for text nodes made only of whitespace (including empty text).
    pub fn is_blank_text(&self) -> bool {
        matches!(self, RichNode::Text(text) if text.trim().is_empty())
    }
}
