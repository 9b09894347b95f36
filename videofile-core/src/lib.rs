//! Videofile Core - Domain model and host seams for video pages
//!
//! This crate provides the building blocks the page renderer needs from its
//! host: content and file records, the collaborator traits the host
//! implements, caption label derivation, URL construction and configuration.

pub mod captions;
pub mod config;
pub mod domain;
pub mod host;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use captions::{caption_label, caption_stem};
pub use config::{ConfigError, VideofileConfig};
pub use domain::{AttachedFile, ContentItem, ContextId, Course, FileCategory, ItemId};
pub use host::{
    ContentStore, FileStore, HostError, LocalizationCatalog, MediaUrlBuilder, PageShell,
    UrlBuilder,
};

/// Errors that can bubble up from any Videofile subsystem.
///
/// Rendering itself never produces these; they come from the host
/// collaborators, configuration or fixture loading.
#[derive(Debug, thiserror::Error)]
pub enum VideofileError {
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fixture error: {0}")]
    Fixture(#[from] host::memory::FixtureError),
}

impl VideofileError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            VideofileError::Host(HostError::ItemNotFound { id }) => {
                format!("Video {id} does not exist")
            }
            VideofileError::Host(_) => "The media store could not be read".to_string(),
            VideofileError::Config(e) => format!("Invalid configuration: {e}"),
            VideofileError::Fixture(_) => "The fixture file could not be loaded".to_string(),
        }
    }

    /// Checks if this error is due to user input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            VideofileError::Config(_)
                | VideofileError::Fixture(_)
                | VideofileError::Host(HostError::ItemNotFound { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, VideofileError>;
