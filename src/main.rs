use clap::Parser;
use miette::Result;
use schmoji::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Unicode(args) => schmoji::cli::unicode::run(args)?,
        Commands::Select(args) => schmoji::cli::select::run(args)?,
        Commands::All(args) => schmoji::cli::all::run(args)?,
        Commands::Clean(args) => schmoji::cli::clean::run(args)?,
        Commands::Completions(args) => schmoji::cli::completions::run(args)?,
    }

    Ok(())
}
