//! neulang command-line entry point
//!
//! Runs an outline script or inline command, optionally followed by the
//! interactive shell.
use neulang_core::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
