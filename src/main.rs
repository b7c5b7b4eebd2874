//! CLI entry point for counting distinct maximal tromino coverages

use clap::Parser;
use tricover::io::cli::{Cli, run};

fn main() -> tricover::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
