use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reelrelay")]
#[command(author, version, about = "Telegram bot that relays Instagram videos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot with long polling (default)
    Run,

    /// Download a single video without Telegram and keep the file
    Download {
        /// Instagram post or reel URL
        url: String,

        /// Directory for the downloaded file (defaults to DOWNLOADS_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Requester id used as the file name prefix
        #[arg(short, long, default_value_t = 0)]
        user_id: i64,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
