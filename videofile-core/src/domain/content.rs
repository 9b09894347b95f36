//! Content items and the identifiers that scope them

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a video content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host scoping identifier grouping the files of one content item instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(pub u64);

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The course a video page belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Short name, used in the page title
    pub short_name: String,
    /// Full name, used as the page heading
    pub full_name: String,
}

/// A media-bearing record rendered as one video page.
///
/// Read from the content store and never mutated during a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    /// Display name, plain text
    pub name: String,
    /// Rich-text description, already HTML
    #[serde(default)]
    pub description: Option<String>,
    pub width: u32,
    pub height: u32,
    pub context_id: ContextId,
}

impl ContentItem {
    /// Returns the description if it carries any content.
    pub fn non_empty_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }
}
