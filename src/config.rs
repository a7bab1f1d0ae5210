use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{PromptError, Result, SystemClipboard, STORAGE_KEY};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory where the storage file lives
    pub data_dir: PathBuf,

    /// Key under which the prompt collection is persisted
    pub storage_key: String,

    /// Override for the clipboard copy command (auto-detected when unset)
    pub clipboard_command: Option<String>,
}

impl Config {
    /// Builds a configuration with the platform data directory, or the
    /// given override.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };

        Ok(Self {
            data_dir,
            storage_key: STORAGE_KEY.to_string(),
            clipboard_command: None,
        })
    }

    /// Resolves the clipboard for this configuration: the configured
    /// command when set, otherwise whatever the platform offers. `None`
    /// means no clipboard capability.
    pub fn clipboard(&self) -> Result<Option<SystemClipboard>> {
        match &self.clipboard_command {
            Some(command) => Ok(Some(SystemClipboard::from_command(command)?)),
            None => Ok(SystemClipboard::detect()),
        }
    }
}

/// Platform-appropriate data directory for the application.
fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "promptstore")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PromptError::ConfigError {
            message: "Could not determine a data directory for this platform".to_string(),
        })
}
