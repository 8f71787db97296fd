//! Mock extraction engine
//!
//! Simulates yt-dlp outcomes without touching the network.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use reelrelay::download::{ExtractedMedia, ExtractionError, Extractor, OutputTemplate};

/// What the mock does when asked to extract
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Write a file of `size` bytes and report it
    Produce {
        media_id: String,
        size: u64,
        title: Option<String>,
    },
    /// Report success for a file that was never written
    ReportMissing { media_id: String },
    /// Write the file, remove it again, then report it
    ProduceThenVanish { media_id: String },
    /// Report success with this exact path and touch nothing
    ReportPath(PathBuf),
    /// Fail the way yt-dlp does, with this reason
    Fail(String),
}

impl MockBehavior {
    pub fn produce(size: u64) -> Self {
        MockBehavior::Produce {
            media_id: "C0ffee123".to_string(),
            size,
            title: Some("Video by test_account".to_string()),
        }
    }
}

pub struct MockExtractor {
    behavior: MockBehavior,
    delay: Duration,
    calls: AtomicUsize,
}

impl MockExtractor {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Blocks the worker thread for `delay` before doing anything.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Extractor for MockExtractor {
    fn name(&self) -> &str {
        "mock"
    }

    fn extract(&self, _url: &str, template: &OutputTemplate) -> Result<ExtractedMedia, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        match &self.behavior {
            MockBehavior::Produce { media_id, size, title } => {
                let path = template.resolve(media_id, "mp4");
                let file = std::fs::File::create(&path).map_err(|e| ExtractionError::Engine(e.to_string()))?;
                file.set_len(*size).map_err(|e| ExtractionError::Engine(e.to_string()))?;
                Ok(ExtractedMedia {
                    id: media_id.clone(),
                    ext: "mp4".to_string(),
                    title: title.clone(),
                    filepath: Some(path),
                })
            }
            MockBehavior::ReportMissing { media_id } => Ok(ExtractedMedia {
                id: media_id.clone(),
                ext: "mp4".to_string(),
                title: None,
                filepath: None,
            }),
            MockBehavior::ProduceThenVanish { media_id } => {
                let path = template.resolve(media_id, "mp4");
                std::fs::write(&path, b"short-lived").map_err(|e| ExtractionError::Engine(e.to_string()))?;
                std::fs::remove_file(&path).map_err(|e| ExtractionError::Engine(e.to_string()))?;
                Ok(ExtractedMedia {
                    id: media_id.clone(),
                    ext: "mp4".to_string(),
                    title: None,
                    filepath: Some(path),
                })
            }
            MockBehavior::ReportPath(path) => Ok(ExtractedMedia {
                id: "Reported".to_string(),
                ext: "mp4".to_string(),
                title: None,
                filepath: Some(path.clone()),
            }),
            MockBehavior::Fail(reason) => Err(ExtractionError::Engine(reason.clone())),
        }
    }
}
