//! Command-line arguments for the `teelog` binary.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "teelog")]
#[command(about = "Copy standard input to the terminal and a log file with timestamps and labels")]
pub struct AppArgs {
    #[arg(long, help = "JSON options file (camelCase keys); flags below override it")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Also append everything to this file")]
    pub file: Option<PathBuf>,

    #[arg(long, help = "Prefix every line with [LABEL]")]
    pub label: Option<String>,

    #[arg(long = "style", help = "Decoration name, repeatable (e.g. --style blue --style bold)")]
    pub styles: Vec<String>,

    #[arg(long, help = "Do not write to the terminal")]
    pub silent: bool,

    #[arg(long = "no-colors", help = "Disable all terminal styling")]
    pub no_colors: bool,

    #[arg(long = "colors-full", help = "Style the message body, not just the prefixes")]
    pub colors_full: bool,

    #[arg(long = "console-date", help = "Show the date on the terminal")]
    pub console_date: bool,

    #[arg(long = "no-console-time", help = "Hide the time on the terminal")]
    pub no_console_time: bool,

    #[arg(long = "no-file-date", help = "Omit the date in the file")]
    pub no_file_date: bool,

    #[arg(long = "no-file-time", help = "Omit the time in the file")]
    pub no_file_time: bool,

    #[arg(long, help = "Write errors and warnings to stderr")]
    pub stderr: bool,

    #[arg(long, help = "Clear the screen and truncate the file before starting")]
    pub clear: bool,

    #[arg(short, long, help = "Emit internal diagnostics on stderr")]
    pub verbose: bool,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
