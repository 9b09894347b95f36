//! Collaborators the host system provides to the page renderer.
//!
//! The renderer never reaches for global state. Everything it reads or
//! emits outside of plain string formatting goes through these traits.

use crate::domain::{AttachedFile, ContentItem, ContextId, Course, FileCategory, ItemId};

pub mod memory;
pub mod media_url;

pub use memory::{Fixture, FixtureError, InMemoryContentStore, InMemoryFileStore, MapCatalog};
pub use media_url::MediaUrlBuilder;

/// Failures reported by host collaborators.
///
/// The renderer passes these through untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Content item {id} not found")]
    ItemNotFound { id: ItemId },

    #[error("Storage error: {reason}")]
    Storage { reason: String },

    #[error("Page shell error: {reason}")]
    Shell { reason: String },
}

/// Looks up content item records.
pub trait ContentStore {
    /// Fetches one content item.
    ///
    /// # Errors
    /// - `HostError::ItemNotFound` - No item with this id exists
    /// - `HostError::Storage` - The store could not be read
    fn get_item(&self, id: ItemId) -> Result<ContentItem, HostError>;
}

/// Lists files attached to a context.
pub trait FileStore {
    /// Lists the files of one category, ordered by item id, path and filename.
    ///
    /// An empty category yields an empty list, never an error.
    ///
    /// # Errors
    /// - `HostError::Storage` - The store could not be read
    fn list_files(
        &self,
        context_id: ContextId,
        category: FileCategory,
    ) -> Result<Vec<AttachedFile>, HostError>;
}

/// Builds absolute URLs for files and site assets.
pub trait UrlBuilder {
    /// Absolute URL serving an attached file.
    fn file_url(&self, file: &AttachedFile, category: FileCategory) -> String;

    /// Absolute URL of the image shown when no poster was uploaded.
    fn default_poster_url(&self) -> String;

    /// Absolute URL of a site-relative asset path.
    fn asset_url(&self, path: &str) -> String;
}

/// Page chrome and markup primitives of the host.
pub trait PageShell {
    /// Course owning the page being rendered.
    fn course(&self) -> &Course;

    fn set_title(&mut self, title: &str);

    fn set_heading(&mut self, heading: &str);

    /// Registers a stylesheet to be linked from the page head.
    fn require_stylesheet(&mut self, url: &str);

    /// Registers a script to be loaded from the page head.
    fn require_script(&mut self, url: &str);

    /// Registers inline script run once the page has loaded.
    fn add_init_code(&mut self, code: &str);

    /// Standard page header, up to the start of the page body content.
    ///
    /// # Errors
    /// - `HostError::Shell` - The page chrome could not be produced
    fn render_header(&self) -> Result<String, HostError>;

    /// Standard page footer, closing everything `render_header` opened.
    ///
    /// # Errors
    /// - `HostError::Shell` - The page chrome could not be produced
    fn render_footer(&self) -> Result<String, HostError>;

    /// Heading element at the given level with already formatted text.
    ///
    /// # Errors
    /// - `HostError::Shell` - The heading could not be produced
    fn render_heading(&self, text: &str, level: u8) -> Result<String, HostError>;

    /// Box container around already formatted content.
    ///
    /// # Errors
    /// - `HostError::Shell` - The box could not be produced
    fn render_box(&self, content: &str, classes: &str, id: &str) -> Result<String, HostError>;
}

/// Localized string lookup.
pub trait LocalizationCatalog {
    /// Returns the localized string for `key` in `namespace`.
    ///
    /// Unknown keys come back as the placeholder `[[key]]`.
    fn lookup(&self, key: &str, namespace: &str) -> String;
}
