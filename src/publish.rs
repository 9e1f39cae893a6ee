//! Publisher: stage, commit and push the working directory.
//!
//! Nothing is rolled back on failure. A run that dies between commit and
//! push leaves the commit in place, and the next run pushes it only once
//! there is something new to commit.

use crate::error::Result;
use crate::git::{has_staged_changes, run_git};
use std::path::Path;
use tracing::info;

/// Settings for a publish run.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub commit_message: String,
    /// Push after committing.
    pub push: bool,
    /// Explicit push target; `None` pushes to the branch's upstream.
    pub remote: Option<String>,
}

/// What a publish run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Nothing was staged; no commit or push was issued.
    NoChanges,
    /// A commit was recorded but not pushed.
    Committed,
    /// A commit was recorded and pushed.
    Pushed,
}

/// Stage everything under `repo_dir`, then commit and push if anything is staged.
///
/// # Returns
///
/// * `Ok(PublishOutcome)` - What was done
/// * `Err(SyncError::GitError)` - Staging, committing or pushing failed
pub fn publish<P: AsRef<Path>>(repo_dir: P, options: &PublishOptions) -> Result<PublishOutcome> {
    let repo_dir = repo_dir.as_ref();

    run_git(repo_dir, &["add", "-A"])?;

    if !has_staged_changes(repo_dir)? {
        info!("nothing staged, skipping commit");
        return Ok(PublishOutcome::NoChanges);
    }

    run_git(repo_dir, &["commit", "-m", &options.commit_message])?;
    info!(message = %options.commit_message, "recorded commit");

    if !options.push {
        return Ok(PublishOutcome::Committed);
    }

    match &options.remote {
        Some(remote) => run_git(repo_dir, &["push", remote.as_str()])?,
        None => run_git(repo_dir, &["push"])?,
    };
    info!("pushed to remote");

    Ok(PublishOutcome::Pushed)
}
