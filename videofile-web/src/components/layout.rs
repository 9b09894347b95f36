//! Layout components - headings, boxes, containers

use super::markup::{Attributes, end_tag, start_tag, tag};

/// Renders a heading with already formatted text.
///
/// Levels outside 1..=6 are clamped into range.
pub fn heading(text: &str, level: u8) -> String {
    let level = level.clamp(1, 6);
    format!("<h{level}>{text}</h{level}>")
}

/// Renders a box around already formatted content.
///
/// Empty `classes` or `id` are left off the element.
pub fn content_box(content: &str, classes: &str, id: &str) -> String {
    let attributes = Attributes::new()
        .with_optional("id", Some(id).filter(|id| !id.is_empty()))
        .with_optional("class", Some(classes).filter(|c| !c.is_empty()));

    tag("div", content, &attributes)
}

/// Opens a container `div` with the given class.
pub fn container_start(class: &str) -> String {
    start_tag("div", &Attributes::new().with("class", class))
}

/// Closes a container opened with [`container_start`].
pub fn container_end() -> String {
    end_tag("div")
}
