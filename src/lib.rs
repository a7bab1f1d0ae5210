//! Local prompt manager library
//!
//! This library provides functionality for creating, storing, searching,
//! and managing titled Markdown prompts persisted through a string
//! key-value store.

mod cli;
mod clipboard;
mod config;
mod errors;
mod helper;
mod kv;
mod prompt;
mod store;
mod surface;
mod types;

// Re-export key components
pub use cli::*;
pub use clipboard::*;
pub use config::*;
pub use errors::*;
pub use helper::*;
pub use kv::*;
pub use prompt::*;
pub use store::*;
pub use surface::*;
pub use types::*;
