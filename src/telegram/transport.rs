//! Outbound chat capabilities used by the request pipeline.
//!
//! The pipeline only needs four operations; hiding them behind a trait keeps
//! it independent of teloxide and lets the test suite drive it with a
//! recording mock.

use async_trait::async_trait;
use std::path::Path;
use teloxide::prelude::*;
use teloxide::types::{InputFile, MessageId, ParseMode, ReplyParameters};

use crate::core::error::AppResult;

/// Handle of the single status message a request edits in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusMessage(pub i32);

/// Async chat operations scoped to the chat a request came from.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends a plain text message and returns its handle.
    async fn reply_text(&self, text: &str) -> AppResult<StatusMessage>;

    /// Replaces the text of a previously sent message.
    async fn edit_text(&self, status: &StatusMessage, text: &str) -> AppResult<()>;

    /// Uploads a local file as a streamable video with an HTML caption.
    async fn send_video(&self, path: &Path, caption: &str) -> AppResult<()>;

    async fn delete_message(&self, status: &StatusMessage) -> AppResult<()>;
}

/// `ChatTransport` over the Telegram Bot API for one inbound message.
///
/// New messages (status and video) are sent as replies to `reply_to`, so in
/// a busy group every answer stays attached to the link that caused it.
#[derive(Clone)]
pub struct TelegramChat {
    bot: Bot,
    chat_id: ChatId,
    reply_to: MessageId,
}

impl TelegramChat {
    pub fn new(bot: Bot, chat_id: ChatId, reply_to: MessageId) -> Self {
        Self { bot, chat_id, reply_to }
    }

    fn reply_parameters(&self) -> ReplyParameters {
        ReplyParameters::new(self.reply_to)
    }
}

#[async_trait]
impl ChatTransport for TelegramChat {
    async fn reply_text(&self, text: &str) -> AppResult<StatusMessage> {
        let sent = self
            .bot
            .send_message(self.chat_id, text)
            .reply_parameters(self.reply_parameters())
            .await?;
        Ok(StatusMessage(sent.id.0))
    }

    async fn edit_text(&self, status: &StatusMessage, text: &str) -> AppResult<()> {
        self.bot
            .edit_message_text(self.chat_id, MessageId(status.0), text)
            .await?;
        Ok(())
    }

    async fn send_video(&self, path: &Path, caption: &str) -> AppResult<()> {
        self.bot
            .send_video(self.chat_id, InputFile::file(path.to_path_buf()))
            .caption(caption)
            .parse_mode(ParseMode::Html)
            .supports_streaming(true)
            .reply_parameters(self.reply_parameters())
            .await?;
        Ok(())
    }

    async fn delete_message(&self, status: &StatusMessage) -> AppResult<()> {
        self.bot.delete_message(self.chat_id, MessageId(status.0)).await?;
        Ok(())
    }
}
