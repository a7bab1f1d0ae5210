//! Core data structures for the promptstore application.
//!
//! This module contains the Prompt record, the unit of storage, and the
//! identifier generation used when a prompt is first created.
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Placeholder shown when a prompt's title is missing.
pub const UNTITLED: &str = "Untitled";

/// Placeholder shown when a prompt's content renders to nothing.
pub const NO_CONTENT: &str = "No content";

/// Represents a single prompt in our system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique identifier for the prompt
    pub id: String,
    /// Prompt title
    pub title: String,
    /// Prompt content in Markdown format
    pub content: String,
}

impl Prompt {
    /// Creates a new prompt with the given title and content
    pub fn new(title: String, content: String) -> Self {
        Prompt {
            id: generate_id(),
            title,
            content,
        }
    }
}

/// Generates an opaque prompt identifier from the current time.
///
/// The Unix timestamp in milliseconds is encoded base36, which keeps ids
/// short and monotonically increasing. Collisions within the same
/// millisecond are assumed negligible for a single-user collection.
pub fn generate_id() -> String {
    encode_base36(Utc::now().timestamp_millis() as u64)
}

fn encode_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).expect("base36 digits are ASCII")
}
