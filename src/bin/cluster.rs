//! Clustering Binary
//!
//! Subcommands: fit, elbow, silhouette

use clap::Parser;
use stockmeans::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::Command::parse().run()
}
