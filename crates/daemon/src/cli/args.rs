pub use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boltview")]
#[command(about = "Browse the nested buckets of a BoltDB-style store")]
pub struct Args {
    /// Path to a TOML config file (defaults are used if not set)
    #[arg(long, global = true, env = "BOLTVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
