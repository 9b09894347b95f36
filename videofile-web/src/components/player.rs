//! Video player element and its source and caption track children

use super::markup::{Attributes, empty_tag, end_tag, start_tag, tag};

/// Configuration payload read by the player script at runtime.
const EMPTY_PLAYER_SETUP: &str = "{}";

/// Attributes of the `<video>` element that hosts sources and tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoElement<'a> {
    /// Unique element id on the page
    pub element_id: String,
    /// Player CSS classes
    pub css_classes: &'a str,
    /// Value of the `preload` attribute
    pub preload: &'a str,
    pub width: u32,
    pub height: u32,
    /// Absolute URL of the poster image
    pub poster_url: &'a str,
}

impl VideoElement<'_> {
    /// Renders the opening `<video>` tag.
    pub fn start_tag(&self) -> String {
        let attributes = Attributes::new()
            .with("id", self.element_id.as_str())
            .with("class", self.css_classes)
            .with("controls", "controls")
            .with("preload", self.preload)
            .with("width", self.width.to_string())
            .with("height", self.height.to_string())
            .with("poster", self.poster_url)
            .with("data-setup", EMPTY_PLAYER_SETUP);

        start_tag("video", &attributes)
    }

    /// Renders the closing `</video>` tag.
    pub fn end_tag(&self) -> String {
        end_tag("video")
    }
}

/// Renders one playable source of the video.
pub fn source_element(src: &str, mime_type: &str) -> String {
    let attributes = Attributes::new().with("src", src).with("type", mime_type);
    empty_tag("source", &attributes)
}

/// A caption track ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack<'a> {
    pub src: &'a str,
    pub label: &'a str,
    /// Whether the player selects this track initially
    pub is_default: bool,
}

/// Renders a caption track.
///
/// Uses an explicit closing tag; some browsers drop self-closed tracks.
pub fn caption_track(track: &CaptionTrack<'_>) -> String {
    let attributes = Attributes::new()
        .with("kind", "captions")
        .with("src", track.src)
        .with("label", track.label)
        .with_optional("default", track.is_default.then_some("default"));

    tag("track", "", &attributes)
}
