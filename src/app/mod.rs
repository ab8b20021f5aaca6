pub mod args;
mod pump;
mod setup;

pub use args::AppArgs;

use anyhow::Result;
use std::io;
use teelog::Stream;

pub fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli())
}

pub fn launch_with_args(args: AppArgs) -> Result<()> {
    setup::configure_logging(args.verbose);
    let options = setup::resolve_options(&args)?;

    let mut stream = Stream::new(options);
    if args.clear {
        stream.clear()?;
    }

    let stdin = io::stdin();
    pump::pump(stdin.lock(), &mut stream)
}
