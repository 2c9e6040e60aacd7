//! Supercaderno CLI
//!
//! Turns a directory of PDF documents into a consolidated notebook, a
//! synopsis and a structured run report.

use clap::Parser;
use supercaderno_core::error::{exit_codes, SupercadernoError};

mod app;
mod commands;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args, cli.format, cli.verbose).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        let code = e
            .downcast_ref::<SupercadernoError>()
            .map(SupercadernoError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}
