//! Error types for the logging streams.
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a [`Stream`](crate::Stream) or its configuration.
///
/// Formatting never fails; only the file target and options loading can.
#[derive(Error, Debug)]
pub enum StreamError {
    /// Appending to or truncating the file target failed.
    #[error("I/O error on log file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The options file could not be read.
    #[error("Failed to read options file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The options document is not valid JSON for [`StreamOptions`](crate::StreamOptions).
    #[error("Invalid stream options: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A named stream was requested from a [`Logger`](crate::Logger) that has none by that name.
    #[error("Unknown stream: {0}")]
    UnknownStream(String),
}

pub type Result<T> = std::result::Result<T, StreamError>;
