//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{
    dir_is_empty, telegram_message_json, write_sized_file, TestEnvironment, SAMPLE_POST_URL, SAMPLE_REEL_URL,
};
