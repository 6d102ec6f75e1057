//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use geolookup_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    match geolookup_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("geolookup: {err}");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("geolookup: logging disabled: {err}");
    }
}
