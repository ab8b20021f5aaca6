//! Text formatting shared by every stream: argument interpolation, value
//! inspection, timestamps and line prefixes.
pub mod args;
pub mod inspect;
pub mod prefix;
pub mod stamp;

pub use args::format_args;
pub use inspect::{inspect, inspect_serialize, InspectOptions};
pub use stamp::StampFormat;

/// One level of group indentation.
pub const INDENT_UNIT: &str = ":  ";

/// The first-line marker written by `group`.
pub const GROUP_MARKER: &str = "+ ";
