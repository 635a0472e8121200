use anyhow::Result;
use clap::Parser;

use accessmap::cli::{Cli, Commands};
use accessmap::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Render(args) => commands::render(&cli, args),
        Commands::Inspect(args) => commands::inspect(&cli, args),
    }
}
