use std::path::{Path, PathBuf};

/// Result alias used across the crate.
pub type YearbarResult<T> = Result<T, YearbarError>;

/// Errors produced while generating a year-progress image.
///
/// `Resource` and `Write` are fatal for a run. `FontLoad` is recoverable: the
/// pipeline turns it into a fallback font plus a warning instead of returning it.
#[derive(thiserror::Error, Debug)]
pub enum YearbarError {
    #[error("resource error: '{}': {reason}", .path.display())]
    Resource {
        path: PathBuf,
        reason: String,
    },

    #[error("font load error: '{}': {reason}", .path.display())]
    FontLoad {
        path: PathBuf,
        reason: String,
    },

    #[error("write error: '{}': {reason}", .path.display())]
    Write {
        path: PathBuf,
        reason: String,
    },

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl YearbarError {
    pub fn resource(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::Resource {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn font_load(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::FontLoad {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn write(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Whether this error may be recovered from within a run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FontLoad { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
