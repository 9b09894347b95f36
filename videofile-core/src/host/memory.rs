//! In-memory host collaborators and JSON fixtures.
//!
//! Used by the CLI to render pages from a fixture file and by tests to set
//! up store contents without a real host.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ContentStore, FileStore, HostError, LocalizationCatalog};
use crate::captions::placeholder_for;
use crate::domain::{AttachedFile, ContentItem, ContextId, Course, FileCategory, ItemId};

/// Errors raised while loading a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Content items keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    items: HashMap<ItemId, ContentItem>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<ContentItem> for InMemoryContentStore {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|item| (item.id, item)).collect(),
        }
    }
}

impl ContentStore for InMemoryContentStore {
    fn get_item(&self, id: ItemId) -> Result<ContentItem, HostError> {
        self.items
            .get(&id)
            .cloned()
            .ok_or(HostError::ItemNotFound { id })
    }
}

/// Attached files, listed in store order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileStore {
    files: Vec<AttachedFile>,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: AttachedFile) {
        self.files.push(file);
    }
}

impl FromIterator<AttachedFile> for InMemoryFileStore {
    fn from_iter<I: IntoIterator<Item = AttachedFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl FileStore for InMemoryFileStore {
    fn list_files(
        &self,
        context_id: ContextId,
        category: FileCategory,
    ) -> Result<Vec<AttachedFile>, HostError> {
        let mut files: Vec<AttachedFile> = self
            .files
            .iter()
            .filter(|file| file.context_id == context_id && file.category == category)
            .cloned()
            .collect();
        files.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        Ok(files)
    }
}

/// Localized strings grouped by namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapCatalog {
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl MapCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one string.
    pub fn insert(&mut self, namespace: &str, key: &str, value: &str) {
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
}

impl LocalizationCatalog for MapCatalog {
    fn lookup(&self, key: &str, namespace: &str) -> String {
        self.namespaces
            .get(namespace)
            .and_then(|strings| strings.get(key))
            .cloned()
            .unwrap_or_else(|| placeholder_for(key))
    }
}

/// Complete store contents for rendering pages without a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub course: Course,
    #[serde(default)]
    pub items: Vec<ContentItem>,
    #[serde(default)]
    pub files: Vec<AttachedFile>,
    #[serde(default)]
    pub catalog: MapCatalog,
}

impl Fixture {
    /// Parses a fixture from JSON text.
    ///
    /// # Errors
    /// - `FixtureError::Parse` - Text is not a valid fixture
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a fixture file.
    ///
    /// # Errors
    /// - `FixtureError::Io` - File could not be read
    /// - `FixtureError::Parse` - File is not a valid fixture
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture = Self::from_json(&json)?;

        tracing::debug!(
            "Loaded fixture {}: {} items, {} files",
            path.display(),
            fixture.items.len(),
            fixture.files.len()
        );

        Ok(fixture)
    }

    pub fn content_store(&self) -> InMemoryContentStore {
        self.items.iter().cloned().collect()
    }

    pub fn file_store(&self) -> InMemoryFileStore {
        self.files.iter().cloned().collect()
    }
}
