//! Shared types for the promptstore application.
//!
//! This module contains the Result alias, operation outcomes, and the CLI
//! command structure.
use std::path::PathBuf;

use clap::Subcommand;

use crate::PromptError;

/// A specialized Result type for promptstore operations.
pub type Result<T> = std::result::Result<T, PromptError>;

/// Outcome of a save operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new prompt was created and selected
    Created { id: String },
    /// The selected prompt was updated in place
    Updated { id: String },
    /// Validation failed; nothing was mutated or persisted
    Rejected,
}

/// Available subcommands for the promptstore application
#[derive(Subcommand)]
pub enum Commands {
    /// Create and save a new prompt
    Add {
        /// Title of the prompt
        #[clap(short = 'T', long)]
        title: String,

        /// Content of the prompt, can be markdown formatted
        #[clap(short, long)]
        content: Option<String>,

        /// Path to a file containing the prompt's content
        #[clap(short, long)]
        file: Option<PathBuf>,
    },

    /// List prompts, optionally filtered by title
    List {
        /// Keep only prompts whose title contains this text
        #[clap(short, long, default_value = "")]
        filter: String,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Search prompts by title (alias for list with a required filter)
    Search {
        /// Search query text
        query: String,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// View a prompt by ID
    Show {
        /// ID of the prompt to view
        id: String,

        /// Format output as raw JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Edit an existing prompt
    Edit {
        /// ID of the prompt to edit
        id: String,

        /// New title for the prompt
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// New content for the prompt
        #[clap(short, long)]
        content: Option<String>,

        /// Path to a file containing the new prompt content
        #[clap(short, long)]
        file: Option<PathBuf>,
    },

    /// Copy a prompt's plain text to the system clipboard
    Copy {
        /// ID of the prompt to copy
        id: String,
    },

    /// Remove a prompt by ID
    Remove {
        /// ID of the prompt to remove
        id: String,
    },
}
