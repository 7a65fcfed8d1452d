//! Corpus cache error types.

use thiserror::Error;

/// Errors that can occur while reading a learned pattern cache.
#[derive(Debug, Error)]
pub enum PatternsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern cache {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no configuration directory could be determined")]
    NoConfigDir,
}

/// Convenience alias for cache results.
pub type PatternsResult<T> = Result<T, PatternsError>;
