//! CLI module for the promptstore application
mod app;
mod args;

pub use app::*;
pub use args::*;
