//! Extraction invoker.
//!
//! Wraps a blocking extraction engine behind an async call. The engine runs
//! on tokio's blocking pool so a slow download never stalls the dispatcher
//! handling other users' messages. Whatever happens inside the engine, the
//! caller gets exactly one `DownloadResult` back.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::config;
use crate::core::error::AppResult;
use crate::download::error::ExtractionError;

/// Where the engine must write its output for one requester.
///
/// Files are namespaced by requester id and the engine-assigned media id, so
/// concurrent requests from different users never collide on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    dir: PathBuf,
    requester_id: i64,
}

impl OutputTemplate {
    pub fn new(dir: impl Into<PathBuf>, requester_id: i64) -> Self {
        Self {
            dir: dir.into(),
            requester_id,
        }
    }

    pub fn requester_id(&self) -> i64 {
        self.requester_id
    }

    /// yt-dlp `--output` template, e.g. `downloads/42_%(id)s.%(ext)s`.
    pub fn ytdlp_pattern(&self) -> String {
        self.dir
            .join(format!("{}_%(id)s.%(ext)s", self.requester_id))
            .to_string_lossy()
            .into_owned()
    }

    /// Concrete path for an engine-assigned id and extension.
    pub fn resolve(&self, media_id: &str, ext: &str) -> PathBuf {
        self.dir.join(format!("{}_{}.{}", self.requester_id, media_id, ext))
    }
}

/// What the engine reports after a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMedia {
    /// Engine-assigned media identifier (Instagram shortcode)
    pub id: String,
    /// Container extension of the downloaded file
    pub ext: String,
    pub title: Option<String>,
    /// Final path as reported by the engine, if it reported one
    pub filepath: Option<PathBuf>,
}

/// A blocking extraction engine.
///
/// Implementations resolve a page URL to a media file written according to
/// `template`. They are always called from a blocking worker thread.
pub trait Extractor: Send + Sync {
    /// Human-readable name of this engine (e.g. "yt-dlp")
    fn name(&self) -> &str;

    /// Download the best single combined stream for `url`.
    fn extract(&self, url: &str, template: &OutputTemplate) -> Result<ExtractedMedia, ExtractionError>;
}

/// Outcome of one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResult {
    Success { artifact_path: PathBuf, title: String },
    Failure { reason: String },
}

impl DownloadResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadResult::Success { .. })
    }
}

/// Runs an `Extractor` off the async scheduler and normalizes its result.
#[derive(Clone)]
pub struct Downloader {
    extractor: Arc<dyn Extractor>,
    downloads_dir: PathBuf,
}

impl Downloader {
    pub fn new(extractor: Arc<dyn Extractor>, downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            extractor,
            downloads_dir: downloads_dir.into(),
        }
    }

    /// Downloads `url` on behalf of `requester_id`.
    ///
    /// Never fails past this boundary: engine errors, spawn errors and worker
    /// panics all come back as `DownloadResult::Failure` with the engine's
    /// message preserved.
    pub async fn download(&self, url: &str, requester_id: i64) -> DownloadResult {
        let template = OutputTemplate::new(self.downloads_dir.clone(), requester_id);

        match self.run_extractor(url, template.clone()).await {
            Ok(media) => {
                let artifact_path = media
                    .filepath
                    .clone()
                    .unwrap_or_else(|| template.resolve(&media.id, &media.ext));
                let title = media
                    .title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| config::download::DEFAULT_TITLE.to_string());

                log::info!(
                    "{} downloaded {} for user {} -> {}",
                    self.extractor.name(),
                    media.id,
                    requester_id,
                    artifact_path.display()
                );
                DownloadResult::Success { artifact_path, title }
            }
            Err(e) => {
                log::error!(
                    "Error downloading video ({}) for user {}: {}",
                    e.subcategory(),
                    requester_id,
                    e
                );
                DownloadResult::Failure { reason: e.to_string() }
            }
        }
    }

    async fn run_extractor(&self, url: &str, template: OutputTemplate) -> Result<ExtractedMedia, ExtractionError> {
        let extractor = Arc::clone(&self.extractor);
        let url = url.to_string();

        let handle = tokio::task::spawn_blocking(move || extractor.extract(&url, &template));

        handle.await?
    }
}

/// Creates the downloads directory if it is missing.
///
/// Called once at startup; the pipeline assumes the directory exists.
pub fn ensure_downloads_dir(dir: &Path) -> AppResult<()> {
    std::fs::create_dir_all(dir)?;
    log::info!("Downloads directory: {}", dir.display());
    Ok(())
}
