//! Media URL layout for attached files

use super::UrlBuilder;
use crate::config::SiteConfig;
use crate::domain::{AttachedFile, FileCategory};

/// Builds URLs of the form
/// `<site-root>/media/<context-id>/<namespace>/<category><path><item-id>/<filename>`.
#[derive(Debug, Clone)]
pub struct MediaUrlBuilder {
    site_root: String,
    module_namespace: String,
    default_poster_path: String,
}

impl MediaUrlBuilder {
    /// Creates a builder from site configuration.
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            site_root: site.site_root.trim_end_matches('/').to_string(),
            module_namespace: site.module_namespace.clone(),
            default_poster_path: site.default_poster_path.clone(),
        }
    }
}

impl UrlBuilder for MediaUrlBuilder {
    fn file_url(&self, file: &AttachedFile, category: FileCategory) -> String {
        format!(
            "{root}/media/{context}/{namespace}/{category}{path}{item}/{filename}",
            root = self.site_root,
            context = file.context_id,
            namespace = self.module_namespace,
            category = category.as_str(),
            path = normalize_file_path(&file.file_path),
            item = file.item_id,
            filename = file.filename,
        )
    }

    fn default_poster_url(&self) -> String {
        self.asset_url(&self.default_poster_path)
    }

    fn asset_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.site_root)
        } else {
            format!("{}/{path}", self.site_root)
        }
    }
}

/// Makes a store path begin and end with exactly one '/'.
fn normalize_file_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContextId;

    fn builder() -> MediaUrlBuilder {
        MediaUrlBuilder::new(&SiteConfig {
            site_root: "https://school.example/".to_string(),
            ..Default::default()
        })
    }

    fn file(path: &str, filename: &str) -> AttachedFile {
        AttachedFile {
            context_id: ContextId(42),
            category: FileCategory::Videos,
            item_id: 0,
            file_path: path.to_string(),
            filename: filename.to_string(),
            mime_type: Some("video/mp4".to_string()),
        }
    }

    #[test]
    fn test_file_url_with_root_path() {
        let url = builder().file_url(&file("/", "lecture.mp4"), FileCategory::Videos);
        assert_eq!(
            url,
            "https://school.example/media/42/mod_videofile/videos/0/lecture.mp4"
        );
    }

    #[test]
    fn test_file_url_with_nested_path() {
        let url = builder().file_url(&file("/hd", "lecture.mp4"), FileCategory::Videos);
        assert_eq!(
            url,
            "https://school.example/media/42/mod_videofile/videos/hd/0/lecture.mp4"
        );
    }

    #[test]
    fn test_category_argument_selects_url_segment() {
        let url = builder().file_url(&file("/", "eng.vtt"), FileCategory::Captions);
        assert!(url.contains("/mod_videofile/captions/0/eng.vtt"));
    }

    #[test]
    fn test_normalize_file_path() {
        assert_eq!(normalize_file_path(""), "/");
        assert_eq!(normalize_file_path("/"), "/");
        assert_eq!(normalize_file_path("a/b"), "/a/b/");
        assert_eq!(normalize_file_path("/a/b/"), "/a/b/");
    }

    #[test]
    fn test_default_poster_and_assets() {
        let builder = builder();
        assert_eq!(
            builder.default_poster_url(),
            "https://school.example/mod/videofile/pix/default-poster.png"
        );
        assert_eq!(
            builder.asset_url("theme/player.css"),
            "https://school.example/theme/player.css"
        );
    }
}
