//! CLI argument parsing for progress-sync.
//!
//! Uses clap derive macros. Running with no arguments performs a full sync
//! of the README next to the executable.

use clap::Parser;
use std::path::PathBuf;

/// Sync a markdown progress tracker with completed note files and push it.
///
/// Notes named `<number>.<title>.md` next to the README mark task `<number>`
/// as done. The README's status glyphs, section counters, badge, total line
/// and progress bar are rewritten to match, then everything is committed and
/// pushed.
#[derive(Parser, Debug, Default)]
#[command(name = "progress-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Working root holding the README and notes (default: the executable's directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Progress document, relative to the root (overrides the config file).
    #[arg(long, value_name = "FILE")]
    pub readme: Option<String>,

    /// Commit but do not push.
    #[arg(long)]
    pub no_push: bool,

    /// Compute and print progress without writing the README or touching git.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
