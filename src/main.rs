//! The main entry point for the `teelog` binary.
mod app;

use anyhow::Result;

/// Reads standard input and logs it to the terminal and, optionally, a file.
///
/// # Errors
///
/// Returns an error if the options file cannot be loaded, standard input
/// cannot be read, or the log file cannot be written.
fn main() -> Result<()> {
    app::launch()
}
