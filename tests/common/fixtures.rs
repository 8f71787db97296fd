//! Test fixtures for pipeline tests
//!
//! Provides a TestEnvironment with a throwaway downloads directory and a
//! pipeline wired to a mock extractor.

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reelrelay::download::{Downloader, Extractor, RequestPipeline};
use tempfile::TempDir;

pub const SAMPLE_REEL_URL: &str = "https://www.instagram.com/reel/C0ffee123/";
pub const SAMPLE_POST_URL: &str = "https://instagram.com/p/ABC123/";

/// Pipeline plus the directory it downloads into.
///
/// The directory is removed when the environment is dropped.
pub struct TestEnvironment {
    pub downloads: TempDir,
    pub pipeline: RequestPipeline,
}

impl TestEnvironment {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        let downloads = tempfile::tempdir().unwrap();
        let pipeline = RequestPipeline::new(Downloader::new(extractor, downloads.path()));
        Self { downloads, pipeline }
    }

    pub fn dir(&self) -> &Path {
        self.downloads.path()
    }

    pub fn is_empty(&self) -> bool {
        dir_is_empty(self.dir())
    }
}

/// Creates a file of exactly `size` bytes without writing them.
pub fn write_sized_file(path: &Path, size: u64) -> PathBuf {
    let file = File::create(path).unwrap();
    file.set_len(size).unwrap();
    path.to_path_buf()
}

pub fn dir_is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

/// Minimal Bot API `Message` object in a private chat.
pub fn telegram_message_json(message_id: i32, chat_id: i64, text: &str) -> serde_json::Value {
    serde_json::json!({
        "message_id": message_id,
        "from": {
            "id": 987654321,
            "is_bot": true,
            "first_name": "ReelRelay",
            "username": "reelrelay_bot"
        },
        "date": 1_700_000_000,
        "chat": {
            "id": chat_id,
            "type": "private",
            "first_name": "Test"
        },
        "text": text
    })
}
