//! Error types for site data loading and configuration.

use thiserror::Error;

/// Errors raised while loading site data (navigation, config).
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid navigation data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("navigation entry {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[cfg(feature = "server")]
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, SiteError>;
