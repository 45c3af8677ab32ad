//! Error kinds that decide how a `cman` run ends.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

#[derive(Debug, Error)]
pub enum CmanError {
    #[error("no cheatsheet for '{name}' (looked for {})", path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("read cheatsheet {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode cheatsheet {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("terminal size unavailable: {reason}")]
    TerminalQuery { reason: String },
}

impl CmanError {
    /// Exit code reported by the CLI for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            CmanError::NotFound { .. } => exit_codes::NOT_FOUND,
            CmanError::Read { .. } => exit_codes::INVALID,
            CmanError::Decode { .. } => exit_codes::DECODE,
            CmanError::TerminalQuery { .. } => exit_codes::TERMINAL,
        }
    }
}
