//! Implementation of the sync run.
//!
//! Scan notes, rewrite the progress document, publish. Each step runs to
//! completion before the next starts, and the first error ends the run.

use crate::config::Config;
use crate::context::SyncContext;
use crate::document::{self, Totals, UpdateOptions};
use crate::error::{Result, SyncError};
use crate::fs::atomic_write_file;
use crate::publish::{publish, PublishOptions, PublishOutcome};
use crate::scan;
use tracing::debug;

/// Settings for one run, after CLI flags have been merged over the config.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub bar_length: usize,
    pub publish: PublishOptions,
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn from_config(config: &Config, no_push: bool, dry_run: bool) -> Self {
        Self {
            bar_length: config.bar_length,
            publish: PublishOptions {
                commit_message: config.commit_message.clone(),
                push: config.push && !no_push,
                remote: config.remote.clone(),
            },
            dry_run,
        }
    }
}

/// What a run found and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub completed: usize,
    pub totals: Totals,
    pub readme_written: bool,
    /// `None` for dry runs.
    pub outcome: Option<PublishOutcome>,
}

/// Execute a sync run and print progress to stdout.
pub fn run_sync(ctx: &SyncContext, options: &SyncOptions) -> Result<SyncReport> {
    println!("=== Progress sync ===");
    println!();

    let completed = scan::completed_ids(ctx.notes_dir())?;
    println!("Found {} completed note(s)", completed.len());

    let original = std::fs::read_to_string(&ctx.readme_path).map_err(|e| {
        SyncError::UserError(format!(
            "failed to read progress document '{}': {}",
            ctx.readme_path.display(),
            e
        ))
    })?;

    let update = document::update(
        &original,
        &completed,
        UpdateOptions {
            bar_length: options.bar_length,
        },
    )?;
    for section in &update.sections {
        debug!(title = %section.title, done = section.done, total = section.total, "section");
    }
    let totals = update.totals;

    if options.dry_run {
        println!(
            "Dry run: {}/{} ({}%), {} row(s) would change",
            totals.done,
            totals.total,
            totals.percent(),
            update.rows_changed
        );
        return Ok(SyncReport {
            completed: completed.len(),
            totals,
            readme_written: false,
            outcome: None,
        });
    }

    let readme_written = update.changed_from(&original);
    if readme_written {
        atomic_write_file(&ctx.readme_path, &update.text)?;
    } else {
        debug!(path = %ctx.readme_path.display(), "progress document already up to date");
    }
    println!(
        "README updated: {}/{} ({}%)",
        totals.done,
        totals.total,
        totals.percent()
    );
    println!();

    println!("Committing and pushing...");
    let outcome = publish(&ctx.root, &options.publish)?;
    match outcome {
        PublishOutcome::NoChanges => println!("No changes to push."),
        PublishOutcome::Committed => println!("Committed; push skipped."),
        PublishOutcome::Pushed => println!("✅ Sync complete, pushed to remote."),
    }

    Ok(SyncReport {
        completed: completed.len(),
        totals,
        readme_written,
        outcome: Some(outcome),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        commit_count, create_test_repo_with_remote, git, head_sha, remote_sha,
    };
    use std::path::Path;

    const README: &str = "# Hot 100

[![Progress](https://img.shields.io/badge/Progress-0%2F3-blue)]()

**Total Progress**: 0/3 (0%)

`░░░░░░░░░░░░░░░░░░░░`

### Hashing (0/3)

| # | Problem | Difficulty | Status |
|---|---------|------------|--------|
| 1 | [Two Sum](./1.two-sum.md) | Easy | ⬜ |
| 49 | [Group Anagrams](./49.group-anagrams.md) | Medium | ⬜ |
| 128 | [Longest Consecutive](./128.longest-consecutive.md) | Medium | ⬜ |
";

    fn seed(repo: &Path) {
        std::fs::write(repo.join("README.md"), README).unwrap();
        git(repo, &["add", "-A"]);
        git(repo, &["commit", "-m", "Add tracker"]);
        git(repo, &["push"]);
    }

    fn options() -> SyncOptions {
        SyncOptions::from_config(&Config::default(), false, false)
    }

    #[test]
    fn test_sync_updates_readme_and_pushes() {
        let (repo, remote) = create_test_repo_with_remote();
        seed(repo.path());
        std::fs::write(repo.path().join("1.two-sum.md"), "# Two Sum\n").unwrap();
        std::fs::write(repo.path().join("49.group-anagrams.md"), "# Anagrams\n").unwrap();
        let before = commit_count(repo.path());

        let ctx = SyncContext::new(repo.path(), "README.md");
        let report = run_sync(&ctx, &options()).unwrap();

        assert_eq!(report.completed, 2);
        assert_eq!(report.totals, Totals { done: 2, total: 3 });
        assert!(report.readme_written);
        assert_eq!(report.outcome, Some(PublishOutcome::Pushed));

        let readme = std::fs::read_to_string(repo.path().join("README.md")).unwrap();
        assert!(readme.contains("### Hashing (2/3)"));
        assert!(readme.contains("**Total Progress**: 2/3 (67%)"));
        assert!(readme.contains("Progress-2%2F3-blue"));
        assert!(readme.contains(
            "| 128 | [Longest Consecutive](./128.longest-consecutive.md) | Medium | ⬜ |"
        ));

        assert_eq!(commit_count(repo.path()), before + 1);
        assert_eq!(remote_sha(remote.path()), head_sha(repo.path()));
    }

    #[test]
    fn test_second_sync_reports_no_changes() {
        let (repo, _remote) = create_test_repo_with_remote();
        seed(repo.path());
        std::fs::write(repo.path().join("1.two-sum.md"), "# Two Sum\n").unwrap();
        let ctx = SyncContext::new(repo.path(), "README.md");

        run_sync(&ctx, &options()).unwrap();
        let before = commit_count(repo.path());
        let report = run_sync(&ctx, &options()).unwrap();

        assert!(!report.readme_written);
        assert_eq!(report.outcome, Some(PublishOutcome::NoChanges));
        assert_eq!(commit_count(repo.path()), before);
    }

    #[test]
    fn test_dry_run_leaves_everything_untouched() {
        let (repo, _remote) = create_test_repo_with_remote();
        seed(repo.path());
        std::fs::write(repo.path().join("1.two-sum.md"), "# Two Sum\n").unwrap();
        let before = commit_count(repo.path());

        let ctx = SyncContext::new(repo.path(), "README.md");
        let opts = SyncOptions::from_config(&Config::default(), false, true);
        let report = run_sync(&ctx, &opts).unwrap();

        assert_eq!(report.totals, Totals { done: 1, total: 3 });
        assert_eq!(report.outcome, None);
        assert_eq!(
            std::fs::read_to_string(repo.path().join("README.md")).unwrap(),
            README
        );
        assert_eq!(commit_count(repo.path()), before);
    }

    #[test]
    fn test_malformed_readme_aborts_before_writing() {
        let (repo, _remote) = create_test_repo_with_remote();
        let broken = "### Hashing (one/3)\n| 1 | a | b | ⬜ |\n";
        std::fs::write(repo.path().join("README.md"), broken).unwrap();
        std::fs::write(repo.path().join("1.two-sum.md"), "# Two Sum\n").unwrap();
        let before = commit_count(repo.path());

        let ctx = SyncContext::new(repo.path(), "README.md");
        let err = run_sync(&ctx, &options()).unwrap_err();

        assert!(matches!(err, SyncError::ParseError { line: 1, .. }));
        assert_eq!(
            std::fs::read_to_string(repo.path().join("README.md")).unwrap(),
            broken
        );
        assert_eq!(commit_count(repo.path()), before);
    }

    #[test]
    fn test_missing_readme_is_user_error() {
        let (repo, _remote) = create_test_repo_with_remote();
        let ctx = SyncContext::new(repo.path(), "PROGRESS.md");

        let err = run_sync(&ctx, &options()).unwrap_err();
        assert!(matches!(err, SyncError::UserError(_)));
        assert!(err.to_string().contains("PROGRESS.md"));
    }

    #[test]
    fn test_options_merge_no_push_over_config() {
        let config = Config {
            remote: Some("upstream".to_string()),
            ..Config::default()
        };
        let opts = SyncOptions::from_config(&config, true, false);
        assert!(!opts.publish.push);
        assert_eq!(opts.publish.remote.as_deref(), Some("upstream"));
        assert_eq!(opts.bar_length, 20);
    }
}
