//! CLI entry point for the percolation curve estimation tool

use clap::Parser;
use percolation::io::cli::{Cli, SweepRunner};

fn main() -> percolation::Result<()> {
    let cli = Cli::parse();
    let runner = SweepRunner::new(cli);
    runner.run()
}
