//! Solidafy Pager CLI
//!
//! Command-line interface for rendering pagination HTML

use clap::Parser;
use solidafy_pager::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging (stderr, so rendered HTML on stdout stays clean)
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
