use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when generating the changelog page
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write changelog page {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ChangelogError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { path, source } => {
                format!("Could not read changelog at {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                format!(
                    "Could not write changelog page to {}: {source}",
                    path.display()
                )
            }
        }
    }
}

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;
