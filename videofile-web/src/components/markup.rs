//! Escaping and attribute rendering shared by all components

use std::fmt::Write;

/// Escapes text for safe inclusion in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Ordered list of HTML attributes.
///
/// Renders as ` name="value"` pairs in insertion order, values escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pairs: Vec<(&'static str, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute.
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((name, value.into()));
        self
    }

    /// Appends an attribute only when `value` is present.
    pub fn with_optional(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders the attributes with a leading space before each pair.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for (name, value) in &self.pairs {
            // Writing into a String cannot fail
            let _ = write!(rendered, r#" {name}="{}""#, escape_html(value));
        }
        rendered
    }
}

/// Renders `<name attrs>`.
pub fn start_tag(name: &str, attributes: &Attributes) -> String {
    format!("<{name}{}>", attributes.render())
}

/// Renders `</name>`.
pub fn end_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Renders a void element, `<name attrs />`.
pub fn empty_tag(name: &str, attributes: &Attributes) -> String {
    format!("<{name}{} />", attributes.render())
}

/// Renders an element with already formatted inner HTML.
pub fn tag(name: &str, inner_html: &str, attributes: &Attributes) -> String {
    format!("<{name}{}>{inner_html}</{name}>", attributes.render())
}
