pub mod completions;
pub mod generate;
pub mod manifest;

use clap::{Parser, Subcommand};

/// roboicon - Robot face app icon generator
///
/// Run without a subcommand to write icon-192.png and icon-512.png to the
/// default output directory.
#[derive(Parser, Debug)]
#[command(name = "roboicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the icon set
    Generate(generate::GenerateArgs),

    /// Print web manifest icon entries as JSON
    Manifest(manifest::ManifestArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
