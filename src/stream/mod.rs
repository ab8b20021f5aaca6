//! A console-style logging stream writing to a terminal and a file at once.
//!
//! Every verb formats its arguments into text and hands it to two
//! independent write paths. Each path keeps its own [`LineState`] and applies
//! its own indentation, label and timestamp before writing. The terminal path
//! adds color and honors `silent`; the file path never does either.
pub mod depth;
pub mod file;
pub mod line_state;
pub mod render;
pub mod tally;
pub mod terminal;

pub use depth::{GroupDepths, TerminalDepth};
pub use file::FileTarget;
pub use line_state::{Fragments, LineState};
pub use tally::Tally;
pub use terminal::{Channel, MemoryTerminal, StdTerminal, Terminal};

use crate::config::StreamOptions;
use crate::error::Result;
use crate::format::{format_args, inspect_serialize, InspectOptions, StampFormat};
use crate::style::{Style, StyleName};
use render::{render, Decorations, Palette};
use serde::Serialize;
use serde_json::Value;
use std::backtrace::Backtrace;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const ERROR_TAG: &str = "[ERROR] ";
const WARN_TAG: &str = "[WARN] ";
const TRACE_TAG: &str = "[TRACE] ";
const ASSERTION_PREFIX: &str = "Assertion failed:";
const TRACE_FRAME: &str = "teelog::stream::Stream::trace";

/// How the body of a terminal write is styled.
#[derive(Clone, Copy)]
enum Body<'a> {
    /// The stream's style, applied only in full-color mode.
    Message,
    /// A fixed style applied whenever colors are on.
    Tag(&'a Style),
}

/// One named output channel: a terminal target plus an optional file target.
pub struct Stream {
    label: String,
    file: Option<FileTarget>,
    style: Style,
    palette: Palette,
    silent: bool,
    colors: bool,
    colors_full: bool,
    console_stamp: StampFormat,
    file_stamp: StampFormat,
    use_stderr: bool,
    console_state: LineState,
    file_state: LineState,
    depths: GroupDepths,
    tally: Tally,
    terminal: Arc<dyn Terminal>,
}

impl Stream {
    /// Creates a stream on the process's stdout/stderr with its own console depth.
    pub fn new(options: StreamOptions) -> Self {
        Self::with_parts(options, Arc::new(StdTerminal), TerminalDepth::new())
    }

    /// Creates a stream on the given terminal, sharing console indentation
    /// with every other stream built from a clone of `depth`.
    pub fn with_parts(
        options: StreamOptions,
        terminal: Arc<dyn Terminal>,
        depth: TerminalDepth,
    ) -> Self {
        let style = Style::resolve(&options.style);
        let palette = Palette::for_style(&style);
        Self {
            label: options.label,
            file: options.file.map(FileTarget::new),
            style,
            palette,
            silent: options.silent,
            colors: options.colors,
            colors_full: options.colors_full,
            console_stamp: StampFormat::new(options.console_date, options.console_time),
            file_stamp: StampFormat::new(options.file_date, options.file_time),
            use_stderr: options.console_stderr,
            console_state: LineState::AtLineStart,
            file_state: LineState::AtLineStart,
            depths: GroupDepths::new(depth),
            tally: Tally::new(),
            terminal,
        }
    }

    /// Writes an error built from `args` unless `condition` holds.
    pub fn assert(&mut self, condition: bool, args: &[Value]) -> Result<()> {
        if condition {
            return Ok(());
        }

        let mut args = args.to_vec();
        match args.first_mut() {
            Some(Value::String(first)) => *first = format!("{ASSERTION_PREFIX} {first}"),
            _ => args.insert(0, Value::String(ASSERTION_PREFIX.to_string())),
        }
        self.error(&args)
    }

    /// Resets both targets: clears the screen, empties the file, and drops
    /// every group level, including the shared console depth.
    pub fn clear(&mut self) -> Result<()> {
        self.console_state = LineState::AtLineStart;
        self.file_state = LineState::AtLineStart;
        self.depths.reset();

        if !self.silent {
            self.terminal.write(Channel::Stdout, &terminal::clear_sequence());
        }
        match &self.file {
            Some(file) => file.truncate(),
            None => Ok(()),
        }
    }

    /// Writes the formatted arguments with no newline appended.
    pub fn write(&mut self, args: &[Value]) -> Result<()> {
        let text = format_args(args);
        self.emit(&text, Body::Message, Channel::Stdout, false)
    }

    pub fn log(&mut self, args: &[Value]) -> Result<()> {
        let text = format_args(args);
        self.log_text(&text)
    }

    pub fn info(&mut self, args: &[Value]) -> Result<()> {
        self.log(args)
    }

    pub fn debug(&mut self, args: &[Value]) -> Result<()> {
        self.log(args)
    }

    /// Logs an inspected rendering of `object`, optionally titled.
    pub fn dir<T: Serialize + ?Sized>(
        &mut self,
        object: &T,
        title: Option<&str>,
        options: Option<&InspectOptions>,
    ) -> Result<()> {
        let rendered = match options {
            Some(options) => inspect_serialize(object, options),
            None => inspect_serialize(object, &InspectOptions::default()),
        };
        match title.filter(|t| !t.is_empty()) {
            Some(title) => self.log_text(&format!("{title}: {rendered}")),
            None => self.log_text(&rendered),
        }
    }

    pub fn table<T: Serialize + ?Sized>(
        &mut self,
        object: &T,
        title: Option<&str>,
        options: Option<&InspectOptions>,
    ) -> Result<()> {
        self.dir(object, title, options)
    }

    pub fn error(&mut self, args: &[Value]) -> Result<()> {
        let tag = Style::from_names(&[StyleName::Red, StyleName::Bold]);
        let text = format!("{}\n", format_args(args));
        self.tagged(ERROR_TAG, &tag, self.alert_channel(), &text)
    }

    pub fn warn(&mut self, args: &[Value]) -> Result<()> {
        let tag = Style::from_names(&[StyleName::Magenta, StyleName::Bold]);
        let text = format!("{}\n", format_args(args));
        self.tagged(WARN_TAG, &tag, self.alert_channel(), &text)
    }

    /// Logs the message followed by the caller's stack.
    pub fn trace(&mut self, args: &[Value]) -> Result<()> {
        let stack = caller_stack(&Backtrace::force_capture().to_string());
        let message = format_args(args);
        let text = match (message.is_empty(), stack.is_empty()) {
            (true, _) => stack,
            (false, true) => message,
            (false, false) => format!("{message}\n{stack}"),
        };

        let tag = Style::from_names(&[StyleName::Bold]);
        self.tagged(TRACE_TAG, &tag, Channel::Stdout, &format!("{text}\n"))
    }

    /// Writes a `+ ` marker line and enters one group level.
    pub fn group(&mut self, args: &[Value]) -> Result<()> {
        let text = format!("{}\n", format_args(args));
        let written = self.emit(&text, Body::Message, Channel::Stdout, true);
        self.depths.enter();
        written
    }

    /// Same as [`group`](Self::group); groups never collapse.
    pub fn group_collapsed(&mut self, args: &[Value]) -> Result<()> {
        self.group(args)
    }

    pub fn group_end(&mut self) {
        self.depths.leave();
    }

    /// Logs `key: n` where `n` counts the calls made for `key`.
    pub fn count(&mut self, key: &str) -> Result<()> {
        let n = self.tally.count(key);
        self.log_text(&format!("{key}: {n}"))
    }

    pub fn time(&mut self, key: &str) {
        self.tally.start(key);
    }

    /// Logs `key: Nms` and forgets the timer. A missing timer logs `0ms`.
    pub fn time_end(&mut self, key: &str) -> Result<()> {
        let elapsed = self.tally.stop(key);
        self.log_text(&format!("{key}: {}ms", elapsed.as_millis()))
    }

    /// Does nothing.
    pub fn profile(&mut self, _args: &[Value]) {}

    /// Does nothing.
    pub fn profile_end(&mut self, _args: &[Value]) {}

    /// Does nothing.
    pub fn time_stamp(&mut self, _args: &[Value]) {}

    pub fn file(&self) -> Option<&Path> {
        self.file.as_ref().map(FileTarget::path)
    }

    pub fn set_file(&mut self, path: Option<PathBuf>) {
        self.file = path.map(FileTarget::new);
        self.file_state = LineState::AtLineStart;
    }

    pub fn silent(&self) -> bool {
        self.silent
    }

    pub fn set_silent(&mut self, silent: bool) {
        self.silent = silent;
    }

    pub fn style(&self) -> &[StyleName] {
        self.style.names()
    }

    pub fn set_style<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.style = Style::resolve(names);
        self.palette = Palette::for_style(&self.style);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// This stream's own group depth, used for file output.
    pub fn depth(&self) -> usize {
        self.depths.local()
    }

    /// The console depth shared with every stream on the same handle.
    pub fn terminal_depth(&self) -> usize {
        self.depths.terminal()
    }

    pub fn terminal_depth_handle(&self) -> &TerminalDepth {
        self.depths.terminal_handle()
    }

    pub fn counter(&self, key: &str) -> u64 {
        self.tally.counter(key)
    }

    pub fn has_timer(&self, key: &str) -> bool {
        self.tally.has_timer(key)
    }

    pub fn console_state(&self) -> LineState {
        self.console_state
    }

    pub fn file_state(&self) -> LineState {
        self.file_state
    }

    fn log_text(&mut self, text: &str) -> Result<()> {
        self.emit(&format!("{text}\n"), Body::Message, Channel::Stdout, false)
    }

    /// Writes `tag` then `text` as one record. Both reach the terminal before
    /// either reaches the file.
    fn tagged(&mut self, tag: &str, style: &Style, channel: Channel, text: &str) -> Result<()> {
        self.write_console(tag, Body::Tag(style), channel, false);
        self.write_console(text, Body::Message, channel, false);
        self.write_file(tag, false)?;
        self.write_file(text, false)
    }

    fn alert_channel(&self) -> Channel {
        if self.use_stderr {
            Channel::Stderr
        } else {
            Channel::Stdout
        }
    }

    fn emit(&mut self, text: &str, body: Body<'_>, channel: Channel, start_group: bool) -> Result<()> {
        self.write_console(text, body, channel, start_group);
        self.write_file(text, start_group)
    }

    fn write_console(&mut self, text: &str, body: Body<'_>, channel: Channel, start_group: bool) {
        if self.silent || text.is_empty() {
            return;
        }

        let styled = match body {
            _ if !self.colors => text.to_string(),
            Body::Tag(style) => style.apply(text),
            Body::Message if self.colors_full => self.style.apply(text),
            Body::Message => text.to_string(),
        };
        let stamp = self.console_stamp.now();
        let decor = Decorations {
            depth: self.depths.terminal(),
            label: &self.label,
            stamp: &stamp,
            palette: self.colors.then_some(&self.palette),
        };
        let (out, next) = render(self.console_state, &styled, &decor, start_group);

        self.console_state = next;
        self.terminal.write(channel, &out);
    }

    fn write_file(&mut self, text: &str, start_group: bool) -> Result<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }

        let stamp = self.file_stamp.now();
        let decor = Decorations {
            depth: self.depths.local(),
            label: &self.label,
            stamp: &stamp,
            palette: None,
        };
        let (out, next) = render(self.file_state, text, &decor, start_group);

        file.append(&out)?;
        self.file_state = next;
        Ok(())
    }
}

/// Reformats a captured backtrace into `at` lines, dropping the capture
/// machinery and the `trace` frame itself.
fn caller_stack(backtrace: &str) -> String {
    let mut frames: Vec<(String, Option<String>)> = Vec::new();
    for line in backtrace.lines() {
        let trimmed = line.trim_start();
        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                frame.1.get_or_insert_with(|| location.to_string());
            }
        } else if let Some((index, symbol)) = trimmed.split_once(": ") {
            if index.chars().all(|c| c.is_ascii_digit()) {
                frames.push((symbol.to_string(), None));
            }
        }
    }

    let skip = frames
        .iter()
        .position(|(symbol, _)| is_trace_frame(symbol))
        .map(|i| i + 1)
        .unwrap_or_else(|| {
            frames
                .iter()
                .take_while(|(symbol, _)| symbol.starts_with("std::backtrace") || symbol.contains("backtrace_rs"))
                .count()
        });

    frames[skip..]
        .iter()
        .map(|(symbol, location)| match location {
            Some(location) => format!("    at {symbol} ({location})"),
            None => format!("    at {symbol}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether a demangled symbol is [`Stream::trace`] itself, with or without a
/// trailing `::h<hash>`.
fn is_trace_frame(symbol: &str) -> bool {
    let symbol = match symbol.rsplit_once("::h") {
        Some((path, hash)) if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) => path,
        _ => symbol,
    };
    symbol == TRACE_FRAME
}
