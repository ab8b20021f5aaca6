//! This module turns command-line arguments into stream options and sets up
//! the binary's own diagnostics.
use super::args::AppArgs;
use anyhow::{Context, Result};
use teelog::StreamOptions;
use tracing_subscriber::EnvFilter;

/// Configures internal diagnostics on stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is on.
pub fn configure_logging(verbose: bool) {
    let fallback = if verbose { "warn,teelog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads the options file if one was given, then applies explicit flags.
pub fn resolve_options(args: &AppArgs) -> Result<StreamOptions> {
    let mut options = match &args.config {
        Some(path) => StreamOptions::from_file(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => StreamOptions::default(),
    };

    if let Some(file) = &args.file {
        options.file = Some(file.clone());
    }
    if let Some(label) = &args.label {
        options.label = label.clone();
    }
    if !args.styles.is_empty() {
        options.style = args.styles.clone();
    }
    options.silent |= args.silent;
    options.colors_full |= args.colors_full;
    options.console_date |= args.console_date;
    options.console_stderr |= args.stderr;
    if args.no_colors {
        options.colors = false;
    }
    if args.no_console_time {
        options.console_time = false;
    }
    if args.no_file_date {
        options.file_date = false;
    }
    if args.no_file_time {
        options.file_time = false;
    }

    tracing::debug!(?options, "resolved stream options");
    Ok(options)
}
