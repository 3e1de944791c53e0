use clap::Subcommand;

mod assets;
mod owners;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Owners(owners::Owners),
    Assets(assets::Assets),
}
