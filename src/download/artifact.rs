//! Scoped ownership of a downloaded file.
//!
//! A `ManagedArtifact` owns one path on disk for the duration of a pipeline
//! call. The file is removed exactly once when the artifact goes out of
//! scope: on normal return, early return, `?` propagation or panic unwind.

use std::path::{Path, PathBuf};

/// Downloaded file that is deleted when its owning scope ends.
///
/// No other component may delete or rename the file while the artifact is
/// alive. A failed deletion is logged and swallowed so cleanup never masks
/// the real outcome of the request.
#[derive(Debug)]
pub struct ManagedArtifact {
    path: Option<PathBuf>,
    cleaned: bool,
}

impl ManagedArtifact {
    /// Takes ownership of `path`. `None` (extraction never produced a file)
    /// makes cleanup a no-op.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path, cleaned: false }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the file is currently present on disk.
    pub fn exists(&self) -> bool {
        self.path.as_deref().is_some_and(Path::exists)
    }

    /// Ends the scope now instead of at drop.
    pub fn cleanup(mut self) {
        self.remove_once();
    }

    /// `cleanup` for async callers: the removal runs on tokio's blocking
    /// pool. If the future is dropped midway, `Drop` still finishes the job.
    pub async fn cleanup_async(mut self) {
        if !self.cleaned {
            if let Some(path) = self.path.as_deref() {
                match tokio::fs::remove_file(path).await {
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    result => log_removal(path, result),
                }
            }
        }
        self.cleaned = true;
    }

    fn remove_once(&mut self) {
        if self.cleaned {
            return;
        }
        self.cleaned = true;

        let Some(path) = self.path.as_deref() else {
            return;
        };
        if !path.exists() {
            return;
        }

        log_removal(path, std::fs::remove_file(path));
    }
}

fn log_removal(path: &Path, result: std::io::Result<()>) {
    match result {
        Ok(()) => {
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            log::info!("File {} removed from local storage", name);
        }
        Err(e) => {
            log::error!("Failed to remove file {}: {}", path.display(), e);
        }
    }
}

impl Drop for ManagedArtifact {
    fn drop(&mut self) {
        self.remove_once();
    }
}
