use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// A repository on `main` with one commit containing `README.md`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// A test repository whose `main` tracks `origin/main` in a bare repository.
///
/// Returns `(repo, bare_remote)`.
pub(crate) fn create_test_repo_with_remote() -> (TempDir, TempDir) {
    let repo = create_test_repo();
    let remote = TempDir::new().unwrap();

    git(remote.path(), &["init", "--bare"]);
    git(remote.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);

    let remote_str = remote.path().to_string_lossy().to_string();
    git(repo.path(), &["remote", "add", "origin", &remote_str]);
    git(repo.path(), &["push", "-u", "origin", "main"]);

    (repo, remote)
}

pub(crate) fn commit_count(repo_dir: &Path) -> usize {
    git(repo_dir, &["rev-list", "--count", "HEAD"]).parse().unwrap()
}

pub(crate) fn head_sha(repo_dir: &Path) -> String {
    git(repo_dir, &["rev-parse", "HEAD"])
}

pub(crate) fn remote_sha(bare_dir: &Path) -> String {
    git(bare_dir, &["rev-parse", "refs/heads/main"])
}

/// Run git, panicking on failure. Returns trimmed stdout.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
