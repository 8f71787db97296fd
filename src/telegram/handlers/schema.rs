//! Dispatcher schema and handler chain builders

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::{handle_help_command, handle_start_command};
use super::requests::run_request;
use super::types::{request_from_message, HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::transport::TelegramChat;

/// Creates the dispatcher schema for the bot.
///
/// Commands are matched first; any other text message goes to the request
/// pipeline. Messages without text and unknown commands are ignored.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(command_handler())
        .branch(message_handler(deps))
}

fn command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        |bot: Bot, msg: Message, cmd: Command| async move {
            log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

            match cmd {
                Command::Start => handle_start_command(&bot, &msg).await?,
                Command::Help => handle_help_command(&bot, &msg).await?,
            }
            Ok(())
        },
    ))
}

/// Plain text that is not a command
fn is_pipeline_text(msg: &Message) -> bool {
    msg.text().is_some_and(|text| !text.starts_with('/'))
}

fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| is_pipeline_text(&msg))
        .endpoint(move |bot: Bot, msg: Message| {
            let pipeline = Arc::clone(&deps.pipeline);
            async move {
                let Some(text) = msg.text() else {
                    return Ok(());
                };
                let request = request_from_message(&msg, text);
                let chat = Arc::new(TelegramChat::new(bot, msg.chat.id, msg.id));

                run_request(pipeline, chat, request).await;
                Ok(())
            }
        })
}
