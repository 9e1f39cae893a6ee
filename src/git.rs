//! Git command runner for progress-sync.
//!
//! Provides a wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module.

use crate::error::{Result, SyncError};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

fn spawn_git(cwd: &Path, args: &[&str]) -> Result<Output> {
    debug!(cwd = %cwd.display(), ?args, "running git");
    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            SyncError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(SyncError::GitError)` - On non-zero exit code, carrying git's diagnostic
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = spawn_git(cwd.as_ref(), args)?;
    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(SyncError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Check whether the index differs from `HEAD`.
///
/// Runs `git diff --cached --quiet`, whose exit code is the answer:
/// 0 means nothing is staged, 1 means something is.
///
/// # Returns
///
/// * `Ok(false)` - Nothing staged
/// * `Ok(true)` - Staged changes present
/// * `Err(SyncError::GitError)` - Git itself failed (e.g. not a repository)
pub fn has_staged_changes<P: AsRef<Path>>(cwd: P) -> Result<bool> {
    let output = spawn_git(cwd.as_ref(), &["diff", "--cached", "--quiet"])?;

    match output.status.code() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        code => {
            let git_output = GitOutput::from_output(&output);
            Err(SyncError::GitError(format!(
                "git diff failed (exit code {}): {}",
                code.unwrap_or(-1),
                git_output.stderr
            )))
        }
    }
}
