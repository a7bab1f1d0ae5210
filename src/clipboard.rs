//! System clipboard integration.
//!
//! Copying goes through an external copy command (`pbcopy`, `wl-copy`,
//! `xclip`, ...) discovered at startup. Availability is not guaranteed;
//! callers that can live without a clipboard probe with
//! [`SystemClipboard::detect`] and degrade when it returns `None`.

use std::{io::Write, process::{Command, Stdio}};

use log::{debug, error};
use which::which;

use crate::{PromptError, Result};

/// Write-only plain-text clipboard.
pub trait Clipboard {
    /// Copies `text` to the clipboard.
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Copy commands probed in order, with the arguments each one needs.
const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Clipboard backed by an external copy command.
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Probes for a platform copy command, returning `None` when the system
    /// has no clipboard capability.
    pub fn detect() -> Option<Self> {
        for (program, args) in COPY_COMMANDS {
            if which(program).is_ok() {
                debug!("Using clipboard command: {}", program);
                return Some(Self {
                    program: program.to_string(),
                    args: args.iter().map(|a| a.to_string()).collect(),
                });
            }
        }
        None
    }

    /// Builds a clipboard from a user-configured command line, e.g.
    /// `"xclip -selection clipboard"`.
    pub fn from_command(command_line: &str) -> Result<Self> {
        let mut parts =
            shell_words::split(command_line).map_err(|e| PromptError::ConfigError {
                message: format!("Invalid clipboard command {:?}: {}", command_line, e),
            })?;

        if parts.is_empty() {
            return Err(PromptError::ConfigError {
                message: "Clipboard command is empty".to_string(),
            });
        }

        let program = parts.remove(0);
        Ok(Self {
            program,
            args: parts,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                error!("Failed to spawn clipboard command {}: {}", self.program, e);
                PromptError::ClipboardFailed {
                    message: format!("failed to spawn {}: {}", self.program, e),
                }
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes()).map_err(|e| {
                error!("Failed to write to clipboard command stdin: {}", e);
                PromptError::ClipboardFailed {
                    message: format!("failed to write to {}: {}", self.program, e),
                }
            })?;
        }
        // Drop stdin so the child sees EOF before we wait on it
        drop(child.stdin.take());

        let status = child.wait().map_err(PromptError::Io)?;
        if !status.success() {
            return Err(PromptError::ClipboardFailed {
                message: format!("{} exited with {}", self.program, status),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_command_splits_program_and_args() {
        let clipboard = SystemClipboard::from_command("xclip -selection clipboard").unwrap();
        assert_eq!(clipboard.program, "xclip");
        assert_eq!(clipboard.args, vec!["-selection", "clipboard"]);
    }

    #[test]
    fn from_command_rejects_empty_command() {
        assert!(matches!(
            SystemClipboard::from_command("   "),
            Err(PromptError::ConfigError { .. })
        ));
    }

    #[test]
    fn copy_pipes_text_through_the_command() {
        // `cat` consumes stdin and exits zero, standing in for a copy command
        let mut clipboard = SystemClipboard::from_command("cat").unwrap();
        clipboard.copy("hello clipboard").unwrap();
    }

    #[test]
    fn copy_reports_command_failure() {
        let mut clipboard = SystemClipboard::from_command("false").unwrap();
        assert!(matches!(
            clipboard.copy("hello"),
            Err(PromptError::ClipboardFailed { .. })
        ));
    }
}
