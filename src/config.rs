//! Construction-time options for a [`Stream`](crate::Stream).
//!
//! The field names follow the camelCase keys of the console-style options
//! object, so an options document can be loaded straight from JSON.
use crate::error::{Result, StreamError};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Every option a stream recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamOptions {
    /// Decoration names, a single string or a list.
    #[serde(deserialize_with = "one_or_many")]
    pub style: Vec<String>,
    /// File target. `None` disables file output.
    pub file: Option<PathBuf>,
    /// Suppress terminal output. File output is unaffected.
    pub silent: bool,
    pub file_date: bool,
    pub file_time: bool,
    /// Style terminal prefixes at all.
    pub colors: bool,
    /// Also style the message body with `style`.
    pub colors_full: bool,
    pub console_date: bool,
    pub console_time: bool,
    /// Route error and warning output to stderr.
    pub console_stderr: bool,
    /// Written as `[label] ` before every line. Empty means none.
    pub label: String,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            style: Vec::new(),
            file: None,
            silent: false,
            file_date: true,
            file_time: true,
            colors: true,
            colors_full: false,
            console_date: false,
            console_time: true,
            console_stderr: false,
            label: String::new(),
        }
    }
}

impl StreamOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StreamError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn with_style<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_file_stamp(mut self, date: bool, time: bool) -> Self {
        self.file_date = date;
        self.file_time = time;
        self
    }

    pub fn with_console_stamp(mut self, date: bool, time: bool) -> Self {
        self.console_date = date;
        self.console_time = time;
        self
    }

    pub fn with_colors(mut self, colors: bool, colors_full: bool) -> Self {
        self.colors = colors;
        self.colors_full = colors_full;
        self
    }

    pub fn with_stderr(mut self, console_stderr: bool) -> Self {
        self.console_stderr = console_stderr;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(name)) => vec![name],
        Some(OneOrMany::Many(names)) => names,
        None => Vec::new(),
    })
}
