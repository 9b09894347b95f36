//! Files attached to a content item, grouped by category

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::content::ContextId;

/// Named bucket of attached files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Poster images shown before playback
    Posters,
    /// Video sources, one per encoding
    Videos,
    /// Caption and subtitle tracks
    Captions,
}

impl FileCategory {
    /// All categories in rendering order.
    pub const ALL: [FileCategory; 3] = [
        FileCategory::Posters,
        FileCategory::Videos,
        FileCategory::Captions,
    ];

    /// Returns the fixed string tag used by file stores and URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            FileCategory::Posters => "posters",
            FileCategory::Videos => "videos",
            FileCategory::Captions => "captions",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "posters" => Ok(FileCategory::Posters),
            "videos" => Ok(FileCategory::Videos),
            "captions" => Ok(FileCategory::Captions),
            _ => Err(format!("Unknown file category: {s}")),
        }
    }
}

/// A previously uploaded file, as listed by the file store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    pub context_id: ContextId,
    pub category: FileCategory,
    /// Store item id the file was uploaded under, usually 0
    #[serde(default)]
    pub item_id: u64,
    /// Directory-like path inside the category, e.g. `/`
    #[serde(default = "root_path")]
    pub file_path: String,
    pub filename: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

fn root_path() -> String {
    "/".to_string()
}

impl AttachedFile {
    /// Returns the MIME type when it is present and non-empty.
    ///
    /// Files without one are not playable and get skipped by the renderer.
    pub fn playable_mime_type(&self) -> Option<&str> {
        self.mime_type
            .as_deref()
            .map(str::trim)
            .filter(|mime| !mime.is_empty())
    }

    /// Key the store orders files by within one category.
    pub fn sort_key(&self) -> (u64, &str, &str) {
        (self.item_id, &self.file_path, &self.filename)
    }
}
