//! Handler types and dependencies

use std::sync::Arc;

use teloxide::types::Message;

use crate::download::pipeline::{DownloadRequest, RequestPipeline};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub pipeline: Arc<RequestPipeline>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }
}

/// Builds the pipeline input from an inbound text message.
///
/// Messages without a sender (channel posts) are attributed to the chat, and
/// so are sender ids that do not fit into `i64`.
pub fn request_from_message(msg: &Message, text: &str) -> DownloadRequest {
    let chat_id = msg.chat.id.0;
    match msg.from.as_ref() {
        Some(user) => {
            let requester_id = i64::try_from(user.id.0).unwrap_or(chat_id);
            DownloadRequest::new(text, requester_id, user.first_name.clone())
        }
        None => DownloadRequest::new(text, chat_id, chat_id.to_string()),
    }
}
