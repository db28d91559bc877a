//! CLI entry point for the batch tiling and crop preparation tool

use clap::Parser;
use tileprep::io::cli::Cli;

fn main() -> tileprep::Result<()> {
    let cli = Cli::parse();
    cli.run()
}
