//! CLI entry point replaying a location track through the grid game

use clap::Parser;
use gridhunt::io::cli::{Cli, TrackRunner};

fn main() -> gridhunt::Result<()> {
    let cli = Cli::parse();
    TrackRunner::new(cli).run().map(|_| ())
}
