//! A default stream plus a registry of named streams sharing one console.
use crate::config::StreamOptions;
use crate::error::{Result, StreamError};
use crate::stream::{StdTerminal, Stream, Terminal, TerminalDepth};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// The console-style entry point.
///
/// A `Logger` dereferences to its default [`Stream`], so every verb is
/// available directly on it. Named streams added with
/// [`add_stream`](Logger::add_stream) write to the same terminal and share its
/// group indentation, while each keeps its own file, label and style.
pub struct Logger {
    default: Stream,
    streams: BTreeMap<String, Stream>,
    terminal: Arc<dyn Terminal>,
    depth: TerminalDepth,
}

impl Logger {
    pub fn new(options: StreamOptions) -> Self {
        Self::with_terminal(options, Arc::new(StdTerminal))
    }

    pub fn with_terminal(options: StreamOptions, terminal: Arc<dyn Terminal>) -> Self {
        let depth = TerminalDepth::new();
        Self {
            default: Stream::with_parts(options, terminal.clone(), depth.clone()),
            streams: BTreeMap::new(),
            terminal,
            depth,
        }
    }

    /// Registers a named stream, replacing any stream already under `name`.
    pub fn add_stream(&mut self, name: impl Into<String>, options: StreamOptions) -> &mut Stream {
        let name = name.into();
        let stream = Stream::with_parts(options, self.terminal.clone(), self.depth.clone());
        tracing::debug!(name = %name, "registering stream");
        match self.streams.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(stream);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(stream),
        }
    }

    pub fn stream(&self, name: &str) -> Result<&Stream> {
        self.streams
            .get(name)
            .ok_or_else(|| StreamError::UnknownStream(name.to_string()))
    }

    pub fn stream_mut(&mut self, name: &str) -> Result<&mut Stream> {
        self.streams
            .get_mut(name)
            .ok_or_else(|| StreamError::UnknownStream(name.to_string()))
    }

    pub fn remove_stream(&mut self, name: &str) -> Option<Stream> {
        self.streams.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.streams.keys().map(String::as_str)
    }

    /// Clears the default stream and every named stream.
    pub fn clear_all(&mut self) -> Result<()> {
        self.default.clear()?;
        for stream in self.streams.values_mut() {
            stream.clear()?;
        }
        Ok(())
    }

    pub fn terminal_depth(&self) -> &TerminalDepth {
        &self.depth
    }
}

impl Deref for Logger {
    type Target = Stream;

    fn deref(&self) -> &Stream {
        &self.default
    }
}

impl DerefMut for Logger {
    fn deref_mut(&mut self) -> &mut Stream {
        &mut self.default
    }
}
