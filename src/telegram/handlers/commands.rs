//! Command handler implementations (/start, /help)

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::HandlerError;
use crate::telegram::messages;

/// Handle /start command
pub(super) async fn handle_start_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    if let Some(user) = msg.from.as_ref() {
        log::info!("User {} (ID: {}) started the bot", user.first_name, user.id);
    }
    bot.send_message(msg.chat.id, messages::START).await?;
    Ok(())
}

/// Handle /help command
pub(super) async fn handle_help_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    bot.send_message(msg.chat.id, messages::HELP).await?;
    Ok(())
}
