//! Console-style logging to a terminal and a file at the same time.
//!
//! A [`Stream`] exposes the familiar console verbs (`log`, `error`, `group`,
//! `count`, `time`, ...) and writes every call to two targets, each with its
//! own timestamps, label, indentation and color rules. Partial lines are
//! tracked per target, so a line assembled from several `write` calls is
//! decorated once. A [`Logger`] bundles a default stream with named streams
//! that share one console.
//!
//! ```no_run
//! use teelog::{args, Logger, StreamOptions};
//!
//! # fn main() -> teelog::Result<()> {
//! let mut console = Logger::new(StreamOptions::default().with_file("app.log").with_label("app"));
//! console.log(&args!["ready on port", 8080])?;
//! console.group(&args!["startup"])?;
//! console.warn(&args!["cache is cold"])?;
//! console.group_end();
//! # Ok(())
//! # }
//! ```
pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod stream;
pub mod style;

pub use config::StreamOptions;
pub use error::{Result, StreamError};
pub use format::{format_args, inspect, InspectOptions};
pub use logger::Logger;
pub use stream::{Channel, LineState, MemoryTerminal, StdTerminal, Stream, Terminal, TerminalDepth};
pub use style::{Style, StyleName};

#[doc(hidden)]
pub use serde_json;

/// Builds a verb argument list, converting each expression with `json!`.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::serde_json::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::serde_json::json!($value)),+]
    };
}
