//! Videofile Web - HTML rendering of video pages
//!
//! Server-rendered markup for a single video page: the page composer, the
//! markup components it is built from, and a standard page shell that wraps
//! the page body in a complete HTML document.

pub mod components;
pub mod composer;
pub mod shell;

// Re-export main types
pub use composer::PageComposer;
pub use shell::StandardPageShell;
