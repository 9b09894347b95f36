//! Reusable HTML components
//!
//! Components are plain functions returning HTML fragments. Attribute values
//! and text passed to them are escaped unless documented otherwise.

pub mod layout;
pub mod markup;
pub mod player;

// Re-export main component functions
pub use layout::{container_end, container_start, content_box, heading};
pub use markup::{Attributes, escape_html};
pub use player::{CaptionTrack, VideoElement, caption_track, source_element};
