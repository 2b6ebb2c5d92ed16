//! Element markup construction

use crate::item::XmlItem;
use crate::scalar::XmlScalar;

/// How text content is rendered into element markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Emit text content verbatim. Reserved characters (`&`, `<`, ...) pass
    /// through unescaped, so values containing them produce markup that is
    /// not well-formed XML. This matches what the invoice stylesheets were
    /// written against and is the default.
    #[default]
    Raw,
    /// Entity-escape `&`, `<`, `>`, `"` and `'` in text content. Element
    /// names are still emitted verbatim.
    Escaped,
}

/// Builds element markup from scalars, records and record lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementWriter {
    mode: EscapeMode,
}

impl ElementWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: EscapeMode) -> Self {
        ElementWriter { mode }
    }

    pub fn mode(&self) -> EscapeMode {
        self.mode
    }

    /// Produce `<name>value</name>`.
    pub fn scalar_to_element(&self, name: &str, value: &XmlScalar) -> String {
        format!("<{}>{}</{}>", name, self.text(value), name)
    }

    /// Produce `<tag>` wrapping one child element per field of `item`, in
    /// the record's field order.
    pub fn record_to_element(&self, tag: &str, item: &XmlItem) -> String {
        let mut out = format!("<{}>", tag);
        for (name, value) in item.iter() {
            out.push_str(&self.scalar_to_element(name, value));
        }
        out.push_str(&format!("</{}>", tag));
        out
    }

    /// Produce `<tag>` wrapping one `<item_tag>` block per record, in input
    /// order, with no separators.
    pub fn list_to_element(&self, tag: &str, item_tag: &str, items: &[XmlItem]) -> String {
        let mut out = format!("<{}>", tag);
        for item in items {
            out.push_str(&self.record_to_element(item_tag, item));
        }
        out.push_str(&format!("</{}>", tag));
        out
    }

    fn text(&self, value: &XmlScalar) -> String {
        let text = value.to_string();
        match self.mode {
            EscapeMode::Raw => text,
            EscapeMode::Escaped => escape_text(&text),
        }
    }
}

/// Entity-escape the five reserved XML characters in `text`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// [`ElementWriter::scalar_to_element`] in the default raw mode.
pub fn scalar_to_element(name: &str, value: &XmlScalar) -> String {
    ElementWriter::new().scalar_to_element(name, value)
}

/// [`ElementWriter::record_to_element`] in the default raw mode.
pub fn record_to_element(tag: &str, item: &XmlItem) -> String {
    ElementWriter::new().record_to_element(tag, item)
}

/// [`ElementWriter::list_to_element`] in the default raw mode.
pub fn list_to_element(tag: &str, item_tag: &str, items: &[XmlItem]) -> String {
    ElementWriter::new().list_to_element(tag, item_tag, items)
}
