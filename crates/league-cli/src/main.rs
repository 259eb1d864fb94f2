mod alerter;
mod cli;
mod commands;
mod shutdown;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<ExitCode> {
    // Initialize logging on stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("league=info".parse()?)
                .add_directive("league_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    debug!("Using league record {}", cli.database.display());

    match cli.command {
        Command::Play => commands::play::run(&cli.database)?,
        Command::Score { name } => {
            if !commands::score::run(&cli.database, &name)? {
                return Ok(ExitCode::from(2));
            }
        }
        Command::League => commands::league::run(&cli.database)?,
    }

    Ok(ExitCode::SUCCESS)
}
