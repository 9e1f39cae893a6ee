//! Working root and path resolution.
//!
//! Without `--root`, the working root is the directory holding the running
//! executable, so the tool can be dropped next to the notes and README it
//! maintains and run from anywhere.

use crate::error::{Result, SyncError};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for a sync run. All paths are absolute when the root is.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Directory git commands run in.
    pub root: PathBuf,

    /// The progress document.
    pub readme_path: PathBuf,
}

impl SyncContext {
    /// Build the context for `root`, with `readme` taken relative to it.
    pub fn new<P: AsRef<Path>>(root: P, readme: &str) -> Self {
        let root = root.as_ref().to_path_buf();
        let readme_path = root.join(readme);
        Self { root, readme_path }
    }

    /// Directory scanned for completed notes: the one holding the document.
    pub fn notes_dir(&self) -> &Path {
        self.readme_path.parent().unwrap_or(&self.root)
    }
}

/// Resolve the working root.
///
/// # Returns
///
/// * `Ok(PathBuf)` - `root_override` if given, else the executable's directory
/// * `Err(SyncError::UserError)` - The override is not a directory, or the
///   executable path cannot be determined
pub fn resolve_root(root_override: Option<&Path>) -> Result<PathBuf> {
    match root_override {
        Some(root) => {
            if !root.is_dir() {
                return Err(SyncError::UserError(format!(
                    "root '{}' is not a directory",
                    root.display()
                )));
            }
            Ok(root.to_path_buf())
        }
        None => executable_dir(),
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| {
        SyncError::UserError(format!("failed to locate the running executable: {}", e))
    })?;
    let exe = exe.canonicalize().unwrap_or(exe);

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        SyncError::UserError(format!(
            "executable path '{}' has no parent directory",
            exe.display()
        ))
    })
}
