use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI definition. Running with no arguments scaffolds the built-in
/// layout into the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "equity-scaffold",
    version,
    about = "Create the equity-fundamentals-analytics project layout"
)]
pub struct Cli {
    /// Directory to create the project root in (defaults to the current directory).
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// Report what would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
