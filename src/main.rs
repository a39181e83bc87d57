//! ecomap-config - Build configuration resolver for the Ecomap Android app.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ecomap_config::cli::output;
use ecomap_config::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ECOMAP_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ecomap_config=debug")
        } else {
            EnvFilter::new("ecomap_config=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.project_dir) {
        let error_msg = e.to_string();
        let suggestion = e.hint();

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
