//! Configuration Store Service binary
//!
//! Stores named configuration records in a flat JSON file and serves CRUD
//! and dotted-path search over HTTP.

use cfs_server::run;
use clap::Parser;

/// Command line interface for the Configuration Store Service
#[derive(Parser, Debug)]
#[command(name = "cfs")]
#[command(about = "Configuration Store Service - named config records with nested-key search")]
#[command(version)]
pub struct Cli {
    /// Path to settings file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
