// Portfolio - Error types
// Library-level failures: loading and validating content, reading config.
// Binaries wrap these in anyhow and only report them.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
