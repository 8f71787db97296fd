use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

use crate::core::error::{AppError, AppResult};

/// Configuration constants for the bot
/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Directory for transient artifacts
/// Read from DOWNLOADS_DIR environment variable
/// Default: downloads (relative to the working directory)
pub static DOWNLOADS_DIR: Lazy<String> =
    Lazy::new(|| env::var("DOWNLOADS_DIR").unwrap_or_else(|_| "downloads".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server URL (optional)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| {
    env::var("BOT_API_URL")
        .ok()
        .and_then(|s| if s.trim().is_empty() { None } else { Some(s) })
});

/// Returns the bot token or a configuration error.
///
/// A missing token is fatal: the caller aborts startup instead of running a
/// bot that can never authenticate.
pub fn require_bot_token() -> AppResult<String> {
    validate_bot_token(&BOT_TOKEN)
}

fn validate_bot_token(raw: &str) -> AppResult<String> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(AppError::Config(
            "BOT_TOKEN not found in environment (set BOT_TOKEN or TELOXIDE_TOKEN)".to_string(),
        ));
    }
    Ok(token.to_string())
}

/// Download configuration
pub mod download {
    use super::Duration;

    /// Socket timeout passed to yt-dlp (in seconds)
    pub const SOCKET_TIMEOUT_SECS: u64 = 30;

    /// Placeholder title when the extractor reports none
    pub const DEFAULT_TITLE: &str = "video";

    /// Timeout for `yt-dlp --version` at startup (in seconds)
    pub const VERSION_CHECK_TIMEOUT_SECS: u64 = 10;

    /// Version check timeout duration
    pub fn version_check_timeout() -> Duration {
        Duration::from_secs(VERSION_CHECK_TIMEOUT_SECS)
    }
}

/// Validation configuration
pub mod validation {
    /// Maximum upload size for the standard Bot API (50 MiB)
    pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

    /// Maximum number of title characters placed into a caption
    pub const MAX_CAPTION_TITLE_CHARS: usize = 100;
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for HTTP requests (in seconds)
    /// Large enough for a 50 MB upload on a slow link
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
