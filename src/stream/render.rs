//! Turns raw text into the bytes a target receives.
//!
//! The same transition runs for the terminal and the file; they differ only
//! in the [`Decorations`] they pass. Blocks that start a line are decorated in
//! four passes, innermost first: group marker, indentation, label, timestamp.
//! Lines that follow a mid-line continuation belong to the record already in
//! progress: they are indented and padded to its width, but get no second
//! label or timestamp.
use super::line_state::{Fragments, LineState};
use crate::format::prefix::{indent_unit, overwrite_first, prefix_lines};
use crate::format::{GROUP_MARKER, INDENT_UNIT};
use crate::style::{Style, StyleName};
use unicode_width::UnicodeWidthStr;

/// Styles used for the prefixes of a colored target.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    pub indent: Style,
    pub label: Style,
    pub stamp: Style,
}

impl Palette {
    /// Indentation and markers gray, timestamps gray italic, and the label
    /// in the stream's own style made bold.
    pub fn for_style(style: &Style) -> Self {
        let mut label = style.names().to_vec();
        label.push(StyleName::Bold);
        Self {
            indent: Style::from_names(&[StyleName::Gray]),
            label: Style::from_names(&label),
            stamp: Style::from_names(&[StyleName::Grey, StyleName::Italic]),
        }
    }
}

/// Per-write decoration settings for one target.
#[derive(Debug, Clone, Copy)]
pub struct Decorations<'a> {
    pub depth: usize,
    pub label: &'a str,
    pub stamp: &'a str,
    /// `None` renders every prefix plain.
    pub palette: Option<&'a Palette>,
}

impl Decorations<'_> {
    fn paint(&self, text: &str, pick: impl Fn(&Palette) -> &Style) -> String {
        match self.palette {
            Some(palette) => pick(palette).apply(text),
            None => text.to_string(),
        }
    }
}

/// Renders `text` against the target's current state, returning the bytes to
/// write and the state that follows them.
///
/// `start_group` only takes effect when the write begins a line.
pub fn render(
    state: LineState,
    text: &str,
    decor: &Decorations<'_>,
    start_group: bool,
) -> (String, LineState) {
    if text.is_empty() {
        return (String::new(), state);
    }

    let parts = Fragments::split(state, text);
    let mut out = String::with_capacity(text.len() + 32);
    if let Some(continuation) = parts.continuation {
        out.push_str(continuation);
    }
    if let Some(block) = parts.block {
        if parts.continuation.is_some() {
            out.push('\n');
        }
        let continued = parts.continuation.is_some();
        out.push_str(&decorate_block(block, decor, start_group && !continued, continued));
    }
    if parts.trailing_newline {
        out.push('\n');
    }

    let next = state.advance(text);
    (out, next)
}

fn decorate_block(block: &str, decor: &Decorations<'_>, start_group: bool, continued: bool) -> String {
    let mut text = block.to_string();

    if start_group {
        let marker = decor.paint(GROUP_MARKER, |p| &p.indent);
        let unit = decor.paint(INDENT_UNIT, |p| &p.indent);
        text = prefix_lines(&text, &marker, &unit);
    }

    if decor.depth > 0 {
        let indent = decor.paint(&indent_unit(decor.depth), |p| &p.indent);
        text = prefix_lines(&text, &indent, &indent);
    }

    if !decor.label.is_empty() {
        let plain = format!("[{}] ", decor.label);
        text = if continued {
            overwrite_first(&text, &plain, &pad(&plain))
        } else {
            let head = format!("{} ", decor.paint(&format!("[{}]", decor.label), |p| &p.label));
            overwrite_first(&text, &plain, &head)
        };
    }

    if !decor.stamp.is_empty() {
        let plain = format!("{}  ", decor.stamp);
        text = if continued {
            overwrite_first(&text, &plain, &pad(&plain))
        } else {
            let head = format!("{}  ", decor.paint(decor.stamp, |p| &p.stamp));
            overwrite_first(&text, &plain, &head)
        };
    }

    text
}

fn pad(plain: &str) -> String {
    " ".repeat(UnicodeWidthStr::width(plain))
}
