//! yt-dlp extraction engine.
//!
//! Runs the `yt-dlp` binary as a child process and reads back a JSON report
//! printed after the file has been moved into place. Called from a blocking
//! worker (see `Downloader`), so it uses `std::process` directly.

use serde::Deserialize;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::core::config;
use crate::download::downloader::{ExtractedMedia, Extractor, OutputTemplate};
use crate::download::error::ExtractionError;

/// Printed once the final file is in place; a JSON object with these keys.
const PRINT_TEMPLATE: &str = "after_move:%(.{id,title,ext,filepath})j";

/// Always the best single pre-muxed stream: no merging, no transcoding.
const FORMAT_SELECTOR: &str = "best";

/// The JSON report yt-dlp prints for `PRINT_TEMPLATE`.
#[derive(Debug, Deserialize)]
struct PrintedInfo {
    id: String,
    title: Option<String>,
    ext: Option<String>,
    filepath: Option<String>,
}

/// Extraction engine backed by the yt-dlp CLI.
#[derive(Debug, Clone)]
pub struct YtDlp {
    bin: String,
    socket_timeout_secs: u64,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new(config::YTDL_BIN.clone())
    }
}

impl YtDlp {
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            socket_timeout_secs: config::download::SOCKET_TIMEOUT_SECS,
        }
    }

    /// Full argument list for one download.
    pub fn build_args(&self, url: &str, template: &OutputTemplate) -> Vec<String> {
        vec![
            "--format".to_string(),
            FORMAT_SELECTOR.to_string(),
            "--output".to_string(),
            template.ytdlp_pattern(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
            "--quiet".to_string(),
            "--no-simulate".to_string(),
            "--socket-timeout".to_string(),
            self.socket_timeout_secs.to_string(),
            "--print".to_string(),
            PRINT_TEMPLATE.to_string(),
            "--".to_string(),
            url.to_string(),
        ]
    }
}

impl Extractor for YtDlp {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    fn extract(&self, url: &str, template: &OutputTemplate) -> Result<ExtractedMedia, ExtractionError> {
        let args = self.build_args(url, template);
        log::info!("Running {} for {} (user {})", self.bin, url, template.requester_id());

        let output = Command::new(&self.bin)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ExtractionError::Spawn(format!("Failed to run {}: {}", self.bin, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::Engine(failure_reason(&stderr, output.status.code())));
        }

        parse_print_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Picks the user-facing reason out of yt-dlp's stderr.
///
/// `ERROR:` lines are returned verbatim; without them the whole stderr is
/// used, and an empty stderr falls back to the exit code.
pub fn failure_reason(stderr: &str, exit_code: Option<i32>) -> String {
    let errors: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("ERROR:"))
        .collect();
    if !errors.is_empty() {
        return errors.join("\n");
    }

    let trimmed = stderr.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    match exit_code {
        Some(code) => format!("yt-dlp exited with code {}", code),
        None => "yt-dlp was terminated by a signal".to_string(),
    }
}

/// Parses the `--print` report. The last non-empty line wins.
fn parse_print_output(stdout: &str) -> Result<ExtractedMedia, ExtractionError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .ok_or_else(|| ExtractionError::Output("yt-dlp reported success but printed nothing".to_string()))?;

    let info: PrintedInfo = serde_json::from_str(line)
        .map_err(|e| ExtractionError::Output(format!("Unexpected yt-dlp output {:?}: {}", line, e)))?;

    let filepath = info.filepath.filter(|p| !p.is_empty()).map(PathBuf::from);
    let ext = info
        .ext
        .filter(|e| !e.is_empty())
        .or_else(|| {
            filepath
                .as_ref()
                .and_then(|p| p.extension())
                .map(|e| e.to_string_lossy().into_owned())
        })
        .ok_or_else(|| ExtractionError::Output(format!("yt-dlp did not report an extension for {}", info.id)))?;

    Ok(ExtractedMedia {
        id: info.id,
        ext,
        title: info.title,
        filepath,
    })
}

/// Logs the installed yt-dlp version at startup.
///
/// A missing or hanging binary is only a warning here; every download will
/// report the problem to its user anyway.
pub async fn log_ytdlp_version(bin: &str) {
    let check = timeout(
        config::download::version_check_timeout(),
        TokioCommand::new(bin).arg("--version").output(),
    )
    .await;

    match check {
        Ok(Ok(output)) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            log::info!("Current yt-dlp version: {}", version);
        }
        Ok(Ok(output)) => {
            log::warn!(
                "yt-dlp --version failed (exit code: {:?}): {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(Err(e)) => {
            log::warn!("Failed to execute {}: {}. Downloads will fail until it is installed.", bin, e);
        }
        Err(_) => {
            log::warn!("yt-dlp version check timed out. Continuing anyway.");
        }
    }
}
