//! featscan - inventory feature-flag references across a source tree
//!
//! featscan provides:
//! - Recursive file collection with a suffix allow-list
//! - Extraction of `License.feature_available?(:flag)` references
//! - A deduplicated, sorted feature list written to a file (lines/json)

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.quiet, cli.verbose);
    cli::run(cli)
}
