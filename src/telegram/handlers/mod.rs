//! Telegram bot handler tree configuration
//!
//! This module provides the dispatcher schema for the bot. Handlers are kept
//! thin: commands answer with static texts, everything else is handed to the
//! request pipeline.

mod commands;
mod requests;
mod schema;
mod types;

pub use requests::run_request;
pub use schema::schema;
pub use types::{request_from_message, HandlerDeps, HandlerError};
