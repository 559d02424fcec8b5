mod cli;
mod commands;
mod error;

use std::process;

use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::cli::{Args, Commands};
use crate::error::Result;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("Application error: {e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    init_logging(args.verbose, args.quiet);

    match args.command {
        Commands::Categories { location } => commands::categories(&location).await,
        Commands::Channels {
            location,
            category,
            search,
            index,
        } => commands::channels(&location, &category, &search, index).await,
        Commands::Sources { command } => commands::sources(command, args.config_dir),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
