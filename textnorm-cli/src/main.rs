//! textnorm command-line entry point

use clap::Parser;
use textnorm_cli::commands::Commands;

/// Normalize dictionary files: lowercase, tokenize, lemmatize, stem,
/// drop stop words and deduplicate
#[derive(Debug, Parser)]
#[command(name = "textnorm", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
