use clap::Parser;

use crate::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "mintlist-cli")]
#[clap(about = "Inspect candy-machine collections and prepare drop assets", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
