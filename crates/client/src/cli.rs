//! Command-line flags.
use std::path::PathBuf;

use clap::Parser;

/// Replays pointer input against a word-search puzzle in the terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "wordsearch")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Puzzle file (.ron or .toml)
    #[arg(long)]
    pub puzzle: Option<PathBuf>,

    /// Game config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pointer script to replay (RON); solves the puzzle when omitted
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Player name for the leaderboard
    #[arg(long)]
    pub player: Option<String>,

    /// Leaderboard file (JSON)
    #[arg(long)]
    pub scores: Option<PathBuf>,

    /// Keep the leaderboard in memory for this run only
    #[arg(long)]
    pub ephemeral: bool,

    /// Cell width in pixels on the virtual surface
    #[arg(long)]
    pub cell_size: Option<f64>,

    /// Delay between replayed pointer events, in milliseconds
    #[arg(long)]
    pub step_delay_ms: Option<u64>,

    /// Also write logs to stderr
    #[arg(long)]
    pub log_stderr: bool,
}
