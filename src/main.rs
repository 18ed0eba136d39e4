//! CLI entry point for rendering identicons to PNG files

use clap::Parser;
use identicon::io::cli::{Cli, IconProcessor};

fn main() -> identicon::Result<()> {
    let cli = Cli::parse();
    let mut processor = IconProcessor::new(cli);
    processor.process()?;
    Ok(())
}
