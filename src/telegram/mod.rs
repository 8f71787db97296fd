//! Telegram integration: bot setup, dispatcher schema, outbound transport

pub mod bot;
pub mod handlers;
pub mod messages;
pub mod transport;

pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{run_request, schema, HandlerDeps, HandlerError};
pub use transport::{ChatTransport, StatusMessage, TelegramChat};
