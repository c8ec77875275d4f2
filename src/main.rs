mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // stdout carries the JSON; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "js_structure=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, compact } => {
            cli::analyze(&file, compact)?;
        }
        Commands::Scan {
            path,
            compact,
            fail_fast,
        } => {
            cli::scan(&path, compact, fail_fast)?;
        }
    }

    Ok(())
}
