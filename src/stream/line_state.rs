//! Continuation tracking for one output target.
//!
//! A target is either at the start of a line or in the middle of one. Text
//! that arrives mid-line continues the previous line undecorated up to its
//! first newline; anything after that is a fresh block.

/// Where the cursor of a target sits after the last write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    #[default]
    AtLineStart,
    MidLine,
}

impl LineState {
    /// The state after `text` has been written. Empty text changes nothing.
    pub fn advance(self, text: &str) -> Self {
        if text.is_empty() {
            self
        } else if text.ends_with('\n') {
            Self::AtLineStart
        } else {
            Self::MidLine
        }
    }
}

/// How an incoming write splits against the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragments<'a> {
    /// Raw text finishing the line already in progress.
    pub continuation: Option<&'a str>,
    /// Text that starts at the beginning of a line and needs decorating.
    pub block: Option<&'a str>,
    /// Whether the write ended with a newline (stripped from the fragments).
    pub trailing_newline: bool,
}

impl<'a> Fragments<'a> {
    pub fn split(state: LineState, text: &'a str) -> Self {
        let (body, trailing_newline) = match text.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (text, false),
        };

        let (continuation, block) = match state {
            LineState::AtLineStart => (None, Some(body)),
            LineState::MidLine => match body.split_once('\n') {
                Some((first, rest)) => (Some(first), Some(rest)),
                None => (Some(body), None),
            },
        };

        Self {
            continuation,
            block,
            trailing_newline,
        }
    }
}
