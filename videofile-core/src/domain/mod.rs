//! Domain types for video pages: content items, courses and attached files.

pub mod content;
pub mod files;

pub use content::{ContentItem, ContextId, Course, ItemId};
pub use files::{AttachedFile, FileCategory};
