//! CLI entry point for Wang tile pattern generation

use clap::Parser;
use wangtile::io::cli::{Cli, PatternRunner};

fn main() -> wangtile::Result<()> {
    let cli = Cli::parse();
    let mut runner = PatternRunner::new(cli);
    runner.run()
}
