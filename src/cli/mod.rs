pub mod all;
pub mod clean;
pub mod completions;
pub mod select;
pub mod unicode;

use clap::{Parser, Subcommand};

/// schmoji - emoji asset pipeline
#[derive(Parser, Debug)]
#[command(name = "schmoji")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten the vendor asset tree into a Unicode-named mirror
    Unicode(unicode::UnicodeArgs),

    /// Copy a curated subset of the flattened tree for the game
    Select(select::SelectArgs),

    /// Run both pipelines with their defaults
    All(all::AllArgs),

    /// Remove the generated output trees
    Clean(clean::CleanArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
