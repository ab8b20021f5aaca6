//! The file side of a stream: synchronous append and truncate.
use crate::error::{Result, StreamError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    path: PathBuf,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `text`, creating the file if needed.
    pub fn append(&self, text: &str) -> Result<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(text.as_bytes()))
            .map_err(|source| self.io_error(source))
    }

    pub fn truncate(&self) -> Result<()> {
        tracing::debug!(path = %self.path.display(), "truncating log file");
        fs::write(&self.path, "").map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> StreamError {
        StreamError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
