use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Team task tracker CLI.
/// Storage defaults to ~/.todo or a directory passed via --dir.
#[derive(Parser)]
#[command(name = "todo", version, about = "Team task tracker with subtasks and asset links")]
pub struct Cli {
    /// Path to the data directory.
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
