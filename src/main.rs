//! CLI entry point for the grid-line drawing generator

use clap::Parser;
use gridlines::io::cli::{Cli, DrawingProcessor};
use gridlines::io::logging::init_logging;

fn main() -> gridlines::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet)?;
    DrawingProcessor::new(cli).process()?;
    Ok(())
}
