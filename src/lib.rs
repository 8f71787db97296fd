//! Reelrelay - Telegram bot that relays Instagram videos into the chat
//!
//! A user sends a link, the bot downloads the video with yt-dlp, checks it
//! against the Bot API upload limit, sends it back with a caption and
//! removes the local copy.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, URL classification
//! - `download`: extraction engine, artifact lifecycle, size gate, request pipeline
//! - `telegram`: bot setup, dispatcher schema, outbound chat transport
//! - `cli`: command-line interface

pub mod cli;
pub mod core;
pub mod download;
pub mod telegram;

// Re-export commonly used types for convenience
pub use self::core::{config, AppError, AppResult};
pub use download::{DownloadRequest, Downloader, PipelineOutcome, RequestPipeline, YtDlp};
pub use telegram::{ChatTransport, TelegramChat};
