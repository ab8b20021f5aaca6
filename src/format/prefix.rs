//! Line prefixing with pad-then-overwrite alignment.
//!
//! Every helper here works on text without its trailing newline. A prefix is
//! written on every line, so a multi-line payload keeps a uniform left edge.
use unicode_width::UnicodeWidthStr;

/// Prefixes the first line with `first` and every other line with `rest`.
pub fn prefix_lines(text: &str, first: &str, rest: &str) -> String {
    let mut out = String::with_capacity(text.len() + first.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(rest);
        } else {
            out.push_str(first);
        }
        out.push_str(line);
    }
    out
}

/// Writes `head` on the first line and blank padding of the same display
/// width on the rest. `plain` is the undecorated head used to measure it.
pub fn overwrite_first(text: &str, plain: &str, head: &str) -> String {
    let pad = " ".repeat(UnicodeWidthStr::width(plain));
    prefix_lines(text, head, &pad)
}

/// The unstyled indentation for a group depth.
pub fn indent_unit(depth: usize) -> String {
    super::INDENT_UNIT.repeat(depth)
}
