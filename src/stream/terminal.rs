//! The terminal side of a stream.
//!
//! Writes are fire-and-forget: a failing stdout or stderr never reaches the
//! caller.
use crossterm::{
    cursor::MoveTo,
    terminal::{Clear, ClearType},
    Command,
};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Which terminal channel a write goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Stdout,
    Stderr,
}

/// Destination for decorated terminal output.
pub trait Terminal: Send + Sync {
    fn write(&self, channel: Channel, text: &str);
}

/// The process's own stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn write(&self, channel: Channel, text: &str) {
        match channel {
            Channel::Stdout => {
                let mut out = io::stdout().lock();
                let _ = out.write_all(text.as_bytes());
                let _ = out.flush();
            }
            Channel::Stderr => {
                let mut err = io::stderr().lock();
                let _ = err.write_all(text.as_bytes());
                let _ = err.flush();
            }
        }
    }
}

/// An in-memory terminal that records every chunk written to it.
///
/// Clones share the same buffer, so one clone can be handed to a stream while
/// another is kept for reading.
#[derive(Debug, Clone, Default)]
pub struct MemoryTerminal {
    chunks: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl MemoryTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to `channel`, concatenated.
    pub fn contents(&self, channel: Channel) -> String {
        self.lock()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    /// Everything written to either channel, in order.
    pub fn all(&self) -> String {
        self.lock().iter().map(|(_, text)| text.as_str()).collect()
    }

    pub fn chunks(&self) -> Vec<(Channel, String)> {
        self.lock().clone()
    }

    pub fn take(&self) -> Vec<(Channel, String)> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Channel, String)>> {
        self.chunks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Terminal for MemoryTerminal {
    fn write(&self, channel: Channel, text: &str) {
        self.lock().push((channel, text.to_string()));
    }
}

/// The escape sequence that clears the screen and homes the cursor.
pub fn clear_sequence() -> String {
    let mut out = String::new();
    let _ = Clear(ClearType::All).write_ansi(&mut out);
    let _ = MoveTo(0, 0).write_ansi(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_terminal_separates_channels() {
        let terminal = MemoryTerminal::new();
        let writer = terminal.clone();
        writer.write(Channel::Stdout, "out ");
        writer.write(Channel::Stderr, "err");
        writer.write(Channel::Stdout, "more");

        assert_eq!(terminal.contents(Channel::Stdout), "out more");
        assert_eq!(terminal.contents(Channel::Stderr), "err");
        assert_eq!(terminal.all(), "out errmore");
        assert_eq!(terminal.take().len(), 3);
        assert!(terminal.chunks().is_empty());
    }

    #[test]
    fn clear_sequence_erases_and_homes() {
        assert_eq!(clear_sequence(), "\x1b[2J\x1b[1;1H");
    }
}
