use anyhow::Result;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::prelude::*;

use reelrelay::cli::{Cli, Commands};
use reelrelay::core::logging::install_panic_hook;
use reelrelay::core::{config, init_logger};
use reelrelay::download::ytdlp::log_ytdlp_version;
use reelrelay::download::{ensure_downloads_dir, DownloadResult, Downloader, RequestPipeline, YtDlp};
use reelrelay::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, token, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Panics inside handlers are logged instead of only going to stderr
    install_panic_hook();

    // Load environment variables from .env before any config value is read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        None | Some(Commands::Run) => run_bot().await,
        Some(Commands::Download { url, output, user_id }) => run_cli_download(&url, output, user_id).await,
    }
}

fn build_downloader(dir: PathBuf) -> Downloader {
    Downloader::new(Arc::new(YtDlp::default()), dir)
}

async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    let token = match config::require_bot_token() {
        Ok(token) => token,
        Err(e) => {
            log::error!("{}", e);
            return Err(e.into());
        }
    };

    let downloads_dir = PathBuf::from(config::DOWNLOADS_DIR.as_str());
    ensure_downloads_dir(&downloads_dir)?;

    log_ytdlp_version(&config::YTDL_BIN).await;

    let bot = create_bot(&token)?;
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let pipeline = Arc::new(RequestPipeline::new(build_downloader(downloads_dir)));
    let deps = HandlerDeps::new(pipeline);

    log::info!("Bot started. Waiting for messages...");

    Dispatcher::builder(bot, schema(deps))
        // Every update gets its own worker, so one slow download never holds
        // back other messages from the same chat.
        .distribution_function(|_| None::<std::convert::Infallible>)
        .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Downloads one URL from the command line and leaves the file in place.
async fn run_cli_download(url: &str, output: Option<PathBuf>, user_id: i64) -> Result<()> {
    let dir = output.unwrap_or_else(|| PathBuf::from(config::DOWNLOADS_DIR.as_str()));
    ensure_downloads_dir(&dir)?;

    if !reelrelay::core::validation::is_supported(url) {
        anyhow::bail!("Not an Instagram URL: {}", url);
    }

    match build_downloader(dir).download(url, user_id).await {
        DownloadResult::Success { artifact_path, title } => {
            log::info!("Downloaded \"{}\" to {}", title, artifact_path.display());
            println!("{}", artifact_path.display());
            Ok(())
        }
        DownloadResult::Failure { reason } => anyhow::bail!("Download failed: {}", reason),
    }
}
