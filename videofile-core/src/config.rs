//! Centralized configuration for Videofile.
//!
//! Site layout and player settings live here instead of being hard-coded
//! across the renderer.

use url::Url;

/// Central configuration for all Videofile components.
///
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct VideofileConfig {
    pub site: SiteConfig,
    pub player: PlayerConfig,
}

/// Errors raised when configuration values are unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Site root is not an absolute http(s) URL.
    #[error("Invalid site root '{value}': {reason}")]
    InvalidSiteRoot { value: String, reason: String },

    /// Module namespace is empty.
    #[error("Module namespace must not be empty")]
    EmptyNamespace,

    /// A site-relative path does not start with '/'.
    #[error("Path '{value}' for {field} must start with '/'")]
    RelativePath { field: &'static str, value: String },
}

/// Where the site lives and how media URLs are laid out.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute URL of the site, without trailing slash
    pub site_root: String,
    /// Namespace segment identifying this module in media URLs
    pub module_namespace: String,
    /// Site-relative path of the image shown when no poster is uploaded
    pub default_poster_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_root: "http://localhost".to_string(),
            module_namespace: "mod_videofile".to_string(),
            default_poster_path: "/mod/videofile/pix/default-poster.png".to_string(),
        }
    }
}

/// Player element attributes and the assets the player needs.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// CSS classes on the video element
    pub css_classes: String,
    /// Value of the `preload` attribute
    pub preload: String,
    /// Site-relative path of the player stylesheet
    pub stylesheet_path: String,
    /// Site-relative path of the player script
    pub script_path: String,
    /// Site-relative path of the flash fallback movie
    pub flash_fallback_path: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            css_classes: "video-js vjs-default-skin".to_string(),
            preload: "auto".to_string(),
            stylesheet_path: "/mod/videofile/video-js/video-js.min.css".to_string(),
            script_path: "/mod/videofile/video-js/video.dev.js".to_string(),
            flash_fallback_path: "/mod/videofile/video-js/video-js.swf".to_string(),
        }
    }
}

impl VideofileConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Empty values are ignored so a blank variable never clears a default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(root) = non_empty_var("VIDEOFILE_SITE_ROOT") {
            config.site.site_root = root.trim_end_matches('/').to_string();
        }

        if let Some(namespace) = non_empty_var("VIDEOFILE_MODULE_NAMESPACE") {
            config.site.module_namespace = namespace;
        }

        if let Some(poster) = non_empty_var("VIDEOFILE_DEFAULT_POSTER") {
            config.site.default_poster_path = poster;
        }

        if let Some(preload) = non_empty_var("VIDEOFILE_PLAYER_PRELOAD") {
            if matches!(preload.as_str(), "auto" | "metadata" | "none") {
                config.player.preload = preload;
            }
        }

        config
    }

    /// Checks that URLs built from this configuration will be well formed.
    ///
    /// # Errors
    /// - `ConfigError::InvalidSiteRoot` - Site root is not an absolute http(s) URL
    /// - `ConfigError::EmptyNamespace` - Module namespace is empty
    /// - `ConfigError::RelativePath` - An asset path does not start with '/'
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed =
            Url::parse(&self.site.site_root).map_err(|e| ConfigError::InvalidSiteRoot {
                value: self.site.site_root.clone(),
                reason: e.to_string(),
            })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidSiteRoot {
                value: self.site.site_root.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.site.module_namespace.trim().is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }

        let paths = [
            ("default_poster_path", &self.site.default_poster_path),
            ("stylesheet_path", &self.player.stylesheet_path),
            ("script_path", &self.player.script_path),
            ("flash_fallback_path", &self.player.flash_fallback_path),
        ];
        for (field, value) in paths {
            if !value.starts_with('/') {
                return Err(ConfigError::RelativePath {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }

    /// Creates a configuration for tests with a fixed, recognizable site root.
    pub fn for_testing() -> Self {
        Self {
            site: SiteConfig {
                site_root: "https://school.example".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
