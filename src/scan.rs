//! Completion scanner.
//!
//! A task counts as completed when a note file named `<digits>.<anything>.md`
//! sits in the notes directory. Several notes may share an identifier (for
//! example a note and its translation); they collapse into one entry.

use crate::error::{Result, SyncError};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static NOTE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\..+\.md$").expect("Invalid note name regex"));

/// Extract the task identifier from a note filename.
///
/// Returns `None` for names that do not follow the `<digits>.<anything>.md`
/// convention or whose digit run does not fit in a `u64`.
pub fn note_id(file_name: &str) -> Option<u64> {
    let caps = NOTE_NAME_REGEX.captures(file_name)?;
    match caps[1].parse::<u64>() {
        Ok(id) => Some(id),
        Err(e) => {
            debug!(file_name, error = %e, "skipping note with out-of-range id");
            None
        }
    }
}

/// List the identifiers of all completed tasks in `dir`.
///
/// Only regular files directly inside `dir` are considered.
///
/// # Returns
///
/// * `Ok(BTreeSet<u64>)` - The completed identifiers (possibly empty)
/// * `Err(SyncError::ScanError)` - If the directory cannot be read
pub fn completed_ids<P: AsRef<Path>>(dir: P) -> Result<BTreeSet<u64>> {
    let dir = dir.as_ref();
    let scan_err = |source: std::io::Error| SyncError::ScanError {
        path: dir.to_path_buf(),
        source,
    };

    let mut completed = BTreeSet::new();
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let file_type = entry.file_type().map_err(scan_err)?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        if let Some(id) = note_id(name) {
            completed.insert(id);
        }
    }

    debug!(dir = %dir.display(), count = completed.len(), "scanned notes directory");
    Ok(completed)
}
