//! Recording chat transport
//!
//! Captures every outbound call in order. Failures can be injected into
//! individual operations.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reelrelay::core::error::{AppError, AppResult};
use reelrelay::telegram::{ChatTransport, StatusMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Reply(String),
    Edit { message_id: i32, text: String },
    SendVideo {
        path: PathBuf,
        caption: String,
        /// Whether the file was on disk when the upload started
        file_present: bool,
    },
    Delete { message_id: i32 },
}

#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<TransportCall>>,
    next_id: AtomicI32,
    fail_send_video: AtomicBool,
    fail_reply: AtomicBool,
    fail_edit: AtomicBool,
    fail_delete: AtomicBool,
    panic_on_edit: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(100),
            ..Default::default()
        }
    }

    pub fn failing_send_video() -> Self {
        let transport = Self::new();
        transport.fail_send_video.store(true, Ordering::SeqCst);
        transport
    }

    pub fn failing_reply() -> Self {
        let transport = Self::new();
        transport.fail_reply.store(true, Ordering::SeqCst);
        transport
    }

    pub fn failing_edit() -> Self {
        let transport = Self::new();
        transport.fail_edit.store(true, Ordering::SeqCst);
        transport
    }

    pub fn failing_delete() -> Self {
        let transport = Self::new();
        transport.fail_delete.store(true, Ordering::SeqCst);
        transport
    }

    /// Panics on the first `edit_text` call, after recording it.
    pub fn panicking_edit() -> Self {
        let transport = Self::new();
        transport.panic_on_edit.store(true, Ordering::SeqCst);
        transport
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Text of every edit, in order
    pub fn edits(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::Edit { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::Reply(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn videos(&self) -> Vec<TransportCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, TransportCall::SendVideo { .. }))
            .collect()
    }

    fn record(&self, call: TransportCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn injected(operation: &str) -> AppError {
    AppError::Io(std::io::Error::other(format!("injected {} failure", operation)))
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn reply_text(&self, text: &str) -> AppResult<StatusMessage> {
        self.record(TransportCall::Reply(text.to_string()));
        if self.fail_reply.load(Ordering::SeqCst) {
            return Err(injected("reply"));
        }
        Ok(StatusMessage(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    async fn edit_text(&self, status: &StatusMessage, text: &str) -> AppResult<()> {
        self.record(TransportCall::Edit {
            message_id: status.0,
            text: text.to_string(),
        });
        if self.panic_on_edit.swap(false, Ordering::SeqCst) {
            panic!("transport blew up while editing");
        }
        if self.fail_edit.load(Ordering::SeqCst) {
            return Err(injected("edit"));
        }
        Ok(())
    }

    async fn send_video(&self, path: &Path, caption: &str) -> AppResult<()> {
        self.record(TransportCall::SendVideo {
            path: path.to_path_buf(),
            caption: caption.to_string(),
            file_present: path.exists(),
        });
        if self.fail_send_video.load(Ordering::SeqCst) {
            return Err(injected("send_video"));
        }
        Ok(())
    }

    async fn delete_message(&self, status: &StatusMessage) -> AppResult<()> {
        self.record(TransportCall::Delete { message_id: status.0 });
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(injected("delete"));
        }
        Ok(())
    }
}
