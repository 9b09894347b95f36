//! Page composer for a single video content item.
//!
//! A page is the shell header with the item heading and description, the
//! player with its sources and caption tracks, then the shell footer. All
//! host access goes through the injected collaborators; the composer keeps
//! no state between renders.

use tracing::{debug, trace};
use videofile_core::config::PlayerConfig;
use videofile_core::{
    ContentItem, ContentStore, ContextId, FileCategory, FileStore, HostError, ItemId,
    LocalizationCatalog, PageShell, UrlBuilder, caption_label,
};

use crate::components::player::{CaptionTrack, VideoElement, caption_track, source_element};
use crate::components::{container_end, container_start, escape_html};

/// Class of the container wrapping the player.
const PLAYER_CONTAINER_CLASS: &str = "videofile";

/// Prefix of the player element id, followed by the item id.
const PLAYER_ID_PREFIX: &str = "videofile-";

/// Classes and id of the box holding the item description.
const INTRO_BOX_CLASSES: &str = "generalbox boxaligncenter";
const INTRO_BOX_ID: &str = "intro";

/// Composes video pages from host collaborators.
pub struct PageComposer<'a> {
    content: &'a dyn ContentStore,
    files: &'a dyn FileStore,
    urls: &'a dyn UrlBuilder,
    catalog: &'a dyn LocalizationCatalog,
    shell: &'a mut dyn PageShell,
    player: PlayerConfig,
}

impl<'a> PageComposer<'a> {
    /// Creates a composer with default player settings.
    pub fn new(
        content: &'a dyn ContentStore,
        files: &'a dyn FileStore,
        urls: &'a dyn UrlBuilder,
        catalog: &'a dyn LocalizationCatalog,
        shell: &'a mut dyn PageShell,
    ) -> Self {
        Self {
            content,
            files,
            urls,
            catalog,
            shell,
            player: PlayerConfig::default(),
        }
    }

    /// Replaces the player settings.
    pub fn with_player_config(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    /// Renders the full page for an item fetched from the content store.
    ///
    /// # Errors
    /// - `HostError` - Propagated unchanged from the content store, file store or shell
    pub fn render_item_page(&mut self, id: ItemId) -> Result<String, HostError> {
        let item = self.content.get_item(id)?;
        self.render_page(&item, item.context_id)
    }

    /// Renders header, player and footer, concatenated in that order.
    ///
    /// # Errors
    /// - `HostError` - Propagated unchanged from the file store or shell
    pub fn render_page(
        &mut self,
        item: &ContentItem,
        context_id: ContextId,
    ) -> Result<String, HostError> {
        let mut output = self.render_header(item)?;
        output.push_str(&self.render_player(item, context_id)?);
        output.push_str(&self.render_footer()?);

        debug!("Rendered page for item {} ({} bytes)", item.id, output.len());
        Ok(output)
    }

    /// Sets up the page and renders the shell header, item heading and description.
    ///
    /// # Errors
    /// - `HostError` - Propagated unchanged from the shell
    pub fn render_header(&mut self, item: &ContentItem) -> Result<String, HostError> {
        let name = escape_html(&item.name);
        let course = self.shell.course();
        let title = format!("{}: {name}", escape_html(&course.short_name));
        let page_heading = escape_html(&course.full_name);

        self.require_player_assets();
        self.shell.set_title(&title);
        self.shell.set_heading(&page_heading);

        let mut output = self.shell.render_header()?;
        output.push_str(&self.shell.render_heading(&name, 3)?);

        if let Some(description) = item.non_empty_description() {
            output.push_str(
                &self
                    .shell
                    .render_box(description, INTRO_BOX_CLASSES, INTRO_BOX_ID)?,
            );
        }

        Ok(output)
    }

    /// Renders the player with its poster, video sources and caption tracks.
    ///
    /// Files without a MIME type are skipped. Only the first poster is used,
    /// and only the first rendered caption track is marked default.
    ///
    /// # Errors
    /// - `HostError` - Propagated unchanged from the file store
    pub fn render_player(
        &self,
        item: &ContentItem,
        context_id: ContextId,
    ) -> Result<String, HostError> {
        let poster_url = self.poster_url(context_id)?;

        let video = VideoElement {
            element_id: format!("{PLAYER_ID_PREFIX}{}", item.id),
            css_classes: &self.player.css_classes,
            preload: &self.player.preload,
            width: item.width,
            height: item.height,
            poster_url: &poster_url,
        };

        let mut output = container_start(PLAYER_CONTAINER_CLASS);
        output.push_str(&video.start_tag());
        output.push_str(&self.render_sources(context_id)?);
        output.push_str(&self.render_caption_tracks(context_id)?);
        output.push_str(&video.end_tag());
        output.push_str(&container_end());

        Ok(output)
    }

    /// Renders the shell footer.
    ///
    /// # Errors
    /// - `HostError` - Propagated unchanged from the shell
    pub fn render_footer(&self) -> Result<String, HostError> {
        self.shell.render_footer()
    }

    fn poster_url(&self, context_id: ContextId) -> Result<String, HostError> {
        let posters = self.files.list_files(context_id, FileCategory::Posters)?;

        Ok(match posters.first() {
            Some(poster) => self.urls.file_url(poster, FileCategory::Posters),
            None => {
                debug!("No poster in context {context_id}, using default image");
                self.urls.default_poster_url()
            }
        })
    }

    fn render_sources(&self, context_id: ContextId) -> Result<String, HostError> {
        let videos = self.files.list_files(context_id, FileCategory::Videos)?;

        let mut output = String::new();
        for file in &videos {
            let Some(mime_type) = file.playable_mime_type() else {
                debug!("Skipping video {} without MIME type", file.filename);
                continue;
            };

            let src = self.urls.file_url(file, FileCategory::Videos);
            trace!("Video source {src} ({mime_type})");
            output.push_str(&source_element(&src, mime_type));
        }

        Ok(output)
    }

    fn render_caption_tracks(&self, context_id: ContextId) -> Result<String, HostError> {
        let captions = self.files.list_files(context_id, FileCategory::Captions)?;

        let mut output = String::new();
        let mut is_first = true;
        for file in &captions {
            if file.playable_mime_type().is_none() {
                debug!("Skipping caption {} without MIME type", file.filename);
                continue;
            }

            let src = self.urls.file_url(file, FileCategory::Captions);
            let label = caption_label(&file.filename, self.catalog);
            trace!("Caption track {src} labelled {label}");

            output.push_str(&caption_track(&CaptionTrack {
                src: &src,
                label: &label,
                is_default: is_first,
            }));
            is_first = false;
        }

        Ok(output)
    }

    fn require_player_assets(&mut self) {
        let stylesheet = self.urls.asset_url(&self.player.stylesheet_path);
        let script = self.urls.asset_url(&self.player.script_path);
        let flash_fallback = self.urls.asset_url(&self.player.flash_fallback_path);

        self.shell.require_stylesheet(&stylesheet);
        self.shell.require_script(&script);
        self.shell.add_init_code(&format!(
            "videojs.options.flash.swf = \"{}\";",
            escape_js_string(&flash_fallback)
        ));
    }
}

/// Escapes text for use inside a double-quoted script string literal.
fn escape_js_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '<' => escaped.push_str("\\u003c"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use videofile_core::config::SiteConfig;
    use videofile_core::host::{InMemoryContentStore, InMemoryFileStore, MapCatalog};
    use videofile_core::{AttachedFile, Course, MediaUrlBuilder};

    use super::*;
    use crate::StandardPageShell;

    fn item(description: Option<&str>) -> ContentItem {
        ContentItem {
            id: ItemId(12),
            name: "Cells & Tissues".to_string(),
            description: description.map(str::to_string),
            width: 640,
            height: 360,
            context_id: ContextId(90),
        }
    }

    fn urls() -> MediaUrlBuilder {
        MediaUrlBuilder::new(&SiteConfig {
            site_root: "https://school.example".to_string(),
            ..Default::default()
        })
    }

    fn shell() -> StandardPageShell {
        StandardPageShell::new(Course {
            short_name: "BIO101".to_string(),
            full_name: "Introduction to Biology".to_string(),
        })
    }

    #[test]
    fn test_header_sets_title_and_heading() {
        let content = InMemoryContentStore::new();
        let files = InMemoryFileStore::new();
        let urls = urls();
        let catalog = MapCatalog::new();
        let mut shell = shell();

        let header = {
            let mut composer = PageComposer::new(&content, &files, &urls, &catalog, &mut shell);
            composer.render_header(&item(None)).unwrap()
        };

        assert_eq!(shell.title(), "BIO101: Cells &amp; Tissues");
        assert_eq!(shell.heading(), "Introduction to Biology");
        assert!(header.contains("<h3>Cells &amp; Tissues</h3>"));
        assert!(!header.contains(r#"id="intro""#));
        assert_eq!(
            shell.scripts(),
            ["https://school.example/mod/videofile/video-js/video.dev.js"]
        );
    }

    #[test]
    fn test_header_includes_description_box() {
        let content = InMemoryContentStore::new();
        let files = InMemoryFileStore::new();
        let urls = urls();
        let catalog = MapCatalog::new();
        let mut shell = shell();
        let mut composer = PageComposer::new(&content, &files, &urls, &catalog, &mut shell);

        let header = composer
            .render_header(&item(Some("<p>Watch <em>this</em></p>")))
            .unwrap();

        assert!(header.contains(
            r#"<div id="intro" class="generalbox boxaligncenter"><p>Watch <em>this</em></p></div>"#
        ));
    }

    #[test]
    fn test_player_uses_custom_player_config() {
        let content = InMemoryContentStore::new();
        let files = InMemoryFileStore::new();
        let urls = urls();
        let catalog = MapCatalog::new();
        let mut shell = shell();
        let player = PlayerConfig {
            css_classes: "plain-player".to_string(),
            preload: "metadata".to_string(),
            ..Default::default()
        };
        let composer = PageComposer::new(&content, &files, &urls, &catalog, &mut shell)
            .with_player_config(player);

        let html = composer.render_player(&item(None), ContextId(90)).unwrap();

        assert!(html.contains(r#"class="plain-player""#));
        assert!(html.contains(r#"preload="metadata""#));
    }

    #[test]
    fn test_render_item_page_propagates_missing_item() {
        let content = InMemoryContentStore::new();
        let files = InMemoryFileStore::new();
        let urls = urls();
        let catalog = MapCatalog::new();
        let mut shell = shell();
        let mut composer = PageComposer::new(&content, &files, &urls, &catalog, &mut shell);

        assert_eq!(
            composer.render_item_page(ItemId(5)),
            Err(HostError::ItemNotFound { id: ItemId(5) })
        );
    }

    #[test]
    fn test_player_propagates_store_failure() {
        struct BrokenFileStore;

        impl FileStore for BrokenFileStore {
            fn list_files(
                &self,
                _context_id: ContextId,
                _category: FileCategory,
            ) -> Result<Vec<AttachedFile>, HostError> {
                Err(HostError::Storage {
                    reason: "disk offline".to_string(),
                })
            }
        }

        let content = InMemoryContentStore::new();
        let urls = urls();
        let catalog = MapCatalog::new();
        let mut shell = shell();
        let composer = PageComposer::new(&content, &BrokenFileStore, &urls, &catalog, &mut shell);

        assert_eq!(
            composer.render_player(&item(None), ContextId(90)),
            Err(HostError::Storage {
                reason: "disk offline".to_string()
            })
        );
    }

    #[test]
    fn test_page_propagates_shell_failure() {
        struct BrokenShell {
            course: Course,
        }

        impl PageShell for BrokenShell {
            fn course(&self) -> &Course {
                &self.course
            }

            fn set_title(&mut self, _title: &str) {}

            fn set_heading(&mut self, _heading: &str) {}

            fn require_stylesheet(&mut self, _url: &str) {}

            fn require_script(&mut self, _url: &str) {}

            fn add_init_code(&mut self, _code: &str) {}

            fn render_header(&self) -> Result<String, HostError> {
                Err(HostError::Shell {
                    reason: "theme missing".to_string(),
                })
            }

            fn render_footer(&self) -> Result<String, HostError> {
                Err(HostError::Shell {
                    reason: "footer template missing".to_string(),
                })
            }

            fn render_heading(&self, text: &str, _level: u8) -> Result<String, HostError> {
                Ok(text.to_string())
            }

            fn render_box(
                &self,
                content: &str,
                _classes: &str,
                _id: &str,
            ) -> Result<String, HostError> {
                Ok(content.to_string())
            }
        }

        let content = InMemoryContentStore::new();
        let files = InMemoryFileStore::new();
        let urls = urls();
        let catalog = MapCatalog::new();
        let mut shell = BrokenShell {
            course: Course {
                short_name: "BIO101".to_string(),
                full_name: "Introduction to Biology".to_string(),
            },
        };
        let mut composer = PageComposer::new(&content, &files, &urls, &catalog, &mut shell);

        assert_eq!(
            composer.render_page(&item(None), ContextId(90)),
            Err(HostError::Shell {
                reason: "theme missing".to_string()
            })
        );
        assert_eq!(
            composer.render_footer(),
            Err(HostError::Shell {
                reason: "footer template missing".to_string()
            })
        );
    }

    #[test]
    fn test_flash_fallback_is_escaped_in_init_code() {
        let content = InMemoryContentStore::new();
        let files = InMemoryFileStore::new();
        let urls = urls();
        let catalog = MapCatalog::new();
        let mut shell = shell();
        let player = PlayerConfig {
            flash_fallback_path: r#"/video-js/"quoted"\player.swf"#.to_string(),
            ..Default::default()
        };
        let mut composer = PageComposer::new(&content, &files, &urls, &catalog, &mut shell)
            .with_player_config(player);

        composer.render_header(&item(None)).unwrap();
        let footer = composer.render_footer().unwrap();

        assert!(footer.contains(
            r#"videojs.options.flash.swf = "https://school.example/video-js/\"quoted\"\\player.swf";"#
        ));
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string("plain/path.swf"), "plain/path.swf");
        assert_eq!(escape_js_string(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape_js_string("</script>"), "\\u003c/script>");
        assert_eq!(escape_js_string("line\nbreak"), "line\\nbreak");
    }
}
