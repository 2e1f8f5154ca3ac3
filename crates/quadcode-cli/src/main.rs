// crates/quadcode-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "quadcode")]
#[command(about = "Quadtree run encoder for binary (two-color) rasters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a plain PBM (P1) file into its quadtree code
    Encode(cmd::encode::EncodeArgs),

    /// Enter an image interactively (width, height, then 0/1 cells) and encode it
    Manual(cmd::manual::ManualArgs),

    /// Encode a plain PBM (P1) file and report code statistics
    Stats(cmd::stats::StatsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Manual(args) => cmd::manual::run(args),
        Commands::Stats(args) => cmd::stats::run(args),
    }
}
