//! Command implementations for progress-sync.
//!
//! [`execute`] turns parsed CLI arguments into a resolved context and run
//! options, then hands off to the sync run.

mod sync;

pub use sync::{run_sync, SyncOptions, SyncReport};

use crate::cli::Cli;
use crate::config::Config;
use crate::context::{resolve_root, SyncContext};
use crate::error::Result;
use tracing::debug;

/// Execute the command line.
///
/// Precedence for every setting is CLI flag, then config file, then default.
pub fn execute(cli: Cli) -> Result<SyncReport> {
    let root = resolve_root(cli.root.as_deref())?;
    let config = Config::load_from_root(&root)?;
    let readme = cli.readme.as_deref().unwrap_or(&config.readme);

    let ctx = SyncContext::new(&root, readme);
    debug!(root = %ctx.root.display(), readme = %ctx.readme_path.display(), "resolved context");

    let options = SyncOptions::from_config(&config, cli.no_push, cli.dry_run);
    run_sync(&ctx, &options)
}
