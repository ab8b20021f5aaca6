//! Named text decorations resolved into ANSI styling.
//!
//! A [`Style`] is built once from an ordered list of names. Unknown names are
//! dropped at that point, so applying a style can never fail. Within a
//! category (foreground, background) the first name wins; attributes
//! accumulate.
use colored::{Color, ColoredString, Colorize};
use std::fmt;

/// Every decoration name a stream recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    Grey,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Inverse,
    Hidden,
    Strikethrough,
}

impl StyleName {
    /// Looks up a name, returning `None` for anything unrecognized.
    pub fn parse(name: &str) -> Option<Self> {
        let style = match name {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "gray" => Self::Gray,
            "grey" => Self::Grey,
            "bgBlack" => Self::BgBlack,
            "bgRed" => Self::BgRed,
            "bgGreen" => Self::BgGreen,
            "bgYellow" => Self::BgYellow,
            "bgBlue" => Self::BgBlue,
            "bgMagenta" => Self::BgMagenta,
            "bgCyan" => Self::BgCyan,
            "bgWhite" => Self::BgWhite,
            "reset" => Self::Reset,
            "bold" => Self::Bold,
            "dim" => Self::Dim,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "inverse" => Self::Inverse,
            "hidden" => Self::Hidden,
            "strikethrough" => Self::Strikethrough,
            _ => return None,
        };
        Some(style)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Grey => "grey",
            Self::BgBlack => "bgBlack",
            Self::BgRed => "bgRed",
            Self::BgGreen => "bgGreen",
            Self::BgYellow => "bgYellow",
            Self::BgBlue => "bgBlue",
            Self::BgMagenta => "bgMagenta",
            Self::BgCyan => "bgCyan",
            Self::BgWhite => "bgWhite",
            Self::Reset => "reset",
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Inverse => "inverse",
            Self::Hidden => "hidden",
            Self::Strikethrough => "strikethrough",
        }
    }

    fn foreground(&self) -> Option<Color> {
        match self {
            Self::Black => Some(Color::Black),
            Self::Red => Some(Color::Red),
            Self::Green => Some(Color::Green),
            Self::Yellow => Some(Color::Yellow),
            Self::Blue => Some(Color::Blue),
            Self::Magenta => Some(Color::Magenta),
            Self::Cyan => Some(Color::Cyan),
            Self::White => Some(Color::White),
            Self::Gray | Self::Grey => Some(Color::BrightBlack),
            _ => None,
        }
    }

    fn background(&self) -> Option<Color> {
        match self {
            Self::BgBlack => Some(Color::Black),
            Self::BgRed => Some(Color::Red),
            Self::BgGreen => Some(Color::Green),
            Self::BgYellow => Some(Color::Yellow),
            Self::BgBlue => Some(Color::Blue),
            Self::BgMagenta => Some(Color::Magenta),
            Self::BgCyan => Some(Color::Cyan),
            Self::BgWhite => Some(Color::White),
            _ => None,
        }
    }

    fn is_attribute(&self) -> bool {
        matches!(
            self,
            Self::Bold
                | Self::Dim
                | Self::Italic
                | Self::Underline
                | Self::Inverse
                | Self::Hidden
                | Self::Strikethrough
        )
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved decoration. The default value leaves text untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    names: Vec<StyleName>,
    foreground: Option<Color>,
    background: Option<Color>,
    attributes: Vec<StyleName>,
}

impl Style {
    /// Resolves an ordered list of names, silently dropping unknown ones.
    pub fn resolve<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut style = Self::default();
        for name in names {
            match StyleName::parse(name.as_ref()) {
                Some(parsed) => style.push(parsed),
                None => tracing::debug!(name = name.as_ref(), "dropping unknown style"),
            }
        }
        style
    }

    pub fn from_names(names: &[StyleName]) -> Self {
        let mut style = Self::default();
        for name in names {
            style.push(*name);
        }
        style
    }

    fn push(&mut self, name: StyleName) {
        self.names.push(name);
        if let Some(color) = name.foreground() {
            self.foreground.get_or_insert(color);
        } else if let Some(color) = name.background() {
            self.background.get_or_insert(color);
        } else if name.is_attribute() && !self.attributes.contains(&name) {
            self.attributes.push(name);
        }
    }

    /// The recognized names this style was built from, in order.
    pub fn names(&self) -> &[StyleName] {
        &self.names
    }

    pub fn is_plain(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.attributes.is_empty()
    }

    /// Decorates every line on its own so reset codes never span a newline.
    pub fn apply(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        text.split('\n')
            .map(|line| self.apply_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn apply_line(&self, line: &str) -> String {
        if line.is_empty() {
            return String::new();
        }
        let mut colored: ColoredString = line.normal();
        if let Some(color) = self.foreground {
            colored = colored.color(color);
        }
        if let Some(color) = self.background {
            colored = colored.on_color(color);
        }
        for attribute in &self.attributes {
            colored = match attribute {
                StyleName::Bold => colored.bold(),
                StyleName::Dim => colored.dimmed(),
                StyleName::Italic => colored.italic(),
                StyleName::Underline => colored.underline(),
                StyleName::Inverse => colored.reversed(),
                StyleName::Hidden => colored.hidden(),
                StyleName::Strikethrough => colored.strikethrough(),
                _ => colored,
            };
        }
        colored.to_string()
    }
}
