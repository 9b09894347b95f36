//! CLI command implementations

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use tracing::info;
use videofile_core::host::Fixture;
use videofile_core::{
    ContextId, FileCategory, FileStore, ItemId, MediaUrlBuilder, UrlBuilder, VideofileConfig,
    caption_label,
};
use videofile_web::{PageComposer, StandardPageShell};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the full page of one video item
    Render {
        /// Path to a JSON fixture describing the store contents
        fixture: PathBuf,
        /// Id of the item to render
        #[arg(short, long)]
        item: u64,
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List caption files of a context with their derived labels
    Labels {
        /// Path to a JSON fixture describing the store contents
        fixture: PathBuf,
        /// Context whose captions to list
        #[arg(short, long)]
        context: u64,
    },
    /// List the files of one category with the URLs they are served from
    Files {
        /// Path to a JSON fixture describing the store contents
        fixture: PathBuf,
        /// Context whose files to list
        #[arg(short, long)]
        context: u64,
        /// File category: posters, videos or captions
        #[arg(short = 'k', long)]
        category: FileCategory,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the error of the command that failed
pub fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = VideofileConfig::from_env();
    config.validate().context("Invalid environment configuration")?;

    match command {
        Commands::Render {
            fixture,
            item,
            output,
        } => render(&config, &fixture, ItemId(item), output.as_deref()),
        Commands::Labels { fixture, context } => labels(&fixture, ContextId(context)),
        Commands::Files {
            fixture,
            context,
            category,
        } => files(&config, &fixture, ContextId(context), category),
    }
}

/// Render one item page to a file or stdout
///
/// # Errors
/// - Fixture could not be loaded
/// - Item does not exist in the fixture
/// - Output file could not be written
pub fn render(
    config: &VideofileConfig,
    fixture_path: &Path,
    item: ItemId,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let fixture = Fixture::from_path(fixture_path)?;
    let page = render_fixture_page(config, &fixture, item)
        .with_context(|| format!("Failed to render item {item}"))?;

    match output {
        Some(path) => {
            std::fs::write(path, &page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote page for item {item} to {}", path.display());
        }
        None => print!("{page}"),
    }

    Ok(())
}

/// Renders the page of one fixture item with the given configuration.
///
/// # Errors
/// - `VideofileError::Host` - Item missing from the fixture
pub fn render_fixture_page(
    config: &VideofileConfig,
    fixture: &Fixture,
    item: ItemId,
) -> videofile_core::Result<String> {
    let content = fixture.content_store();
    let files = fixture.file_store();
    let urls = MediaUrlBuilder::new(&config.site);
    let mut shell = StandardPageShell::new(fixture.course.clone());

    let mut composer =
        PageComposer::new(&content, &files, &urls, &fixture.catalog, &mut shell)
            .with_player_config(config.player.clone());

    Ok(composer.render_item_page(item)?)
}

/// Print the caption labels of a context
///
/// # Errors
/// - Fixture could not be loaded
pub fn labels(fixture_path: &Path, context: ContextId) -> anyhow::Result<()> {
    let fixture = Fixture::from_path(fixture_path)?;

    let lines = caption_label_lines(&fixture, context)?;
    if lines.is_empty() {
        println!("No caption files in context {context}");
    }
    for line in &lines {
        println!("{line}");
    }

    Ok(())
}

/// Print the files of one category and their URLs
///
/// # Errors
/// - Fixture could not be loaded
pub fn files(
    config: &VideofileConfig,
    fixture_path: &Path,
    context: ContextId,
    category: FileCategory,
) -> anyhow::Result<()> {
    let fixture = Fixture::from_path(fixture_path)?;

    let lines = file_url_lines(config, &fixture, context, category)?;
    if lines.is_empty() {
        println!("No {category} files in context {context}");
    }
    for line in &lines {
        println!("{line}");
    }

    Ok(())
}

/// Lists `filename<TAB>url` for one category of a context in store order.
///
/// # Errors
/// - `VideofileError::Host` - File store could not be read
pub fn file_url_lines(
    config: &VideofileConfig,
    fixture: &Fixture,
    context: ContextId,
    category: FileCategory,
) -> videofile_core::Result<Vec<String>> {
    let urls = MediaUrlBuilder::new(&config.site);
    let files = fixture.file_store().list_files(context, category)?;

    Ok(files
        .iter()
        .map(|file| format!("{}\t{}", file.filename, urls.file_url(file, category)))
        .collect())
}

/// One caption file and the label the player would show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionLabelLine {
    pub filename: String,
    /// `None` when the file has no MIME type and is not rendered
    pub label: Option<String>,
}

impl fmt::Display for CaptionLabelLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}\t{label}", self.filename),
            None => write!(f, "{}\t(skipped: no MIME type)", self.filename),
        }
    }
}

/// Lists caption labels of a context in store order.
///
/// # Errors
/// - `VideofileError::Host` - File store could not be read
pub fn caption_label_lines(
    fixture: &Fixture,
    context: ContextId,
) -> videofile_core::Result<Vec<CaptionLabelLine>> {
    let files = fixture
        .file_store()
        .list_files(context, FileCategory::Captions)?;

    Ok(files
        .into_iter()
        .map(|file| CaptionLabelLine {
            label: file
                .playable_mime_type()
                .map(|_| caption_label(&file.filename, &fixture.catalog)),
            filename: file.filename,
        })
        .collect())
}
