use clap::Parser;

mod cli;
mod commands;
mod error;
mod models;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::AppError;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Owners(owners) => owners.run().await,
        Commands::Assets(assets) => assets.run(),
    }
}
