use clap::Parser;
use miette::Result;
use roboicon::cli::{Cli, Commands};
use roboicon::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        None => roboicon::cli::generate::run(Default::default(), &printer)?,
        Some(Commands::Generate(args)) => roboicon::cli::generate::run(args, &printer)?,
        Some(Commands::Manifest(args)) => roboicon::cli::manifest::run(args)?,
        Some(Commands::Completions(args)) => roboicon::cli::completions::run(args)?,
    }

    Ok(())
}
