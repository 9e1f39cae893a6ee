//! Config struct definition and defaults.

use crate::document::DEFAULT_BAR_LENGTH;
use serde::{Deserialize, Serialize};

/// Name of the optional config file inside the working root.
pub const CONFIG_FILE_NAME: &str = ".progress-sync.yaml";

/// Configuration for a sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Document settings
    // =========================================================================
    /// Progress document path, relative to the working root.
    #[serde(default = "default_readme")]
    pub readme: String,

    /// Number of cells in the rendered progress bar.
    #[serde(default = "default_bar_length")]
    pub bar_length: usize,

    // =========================================================================
    // Git settings
    // =========================================================================
    /// Message used for the sync commit.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Whether to push after committing.
    #[serde(default = "default_true")]
    pub push: bool,

    /// Remote to push to. When unset, `git push` uses the upstream of the
    /// current branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme: default_readme(),
            bar_length: default_bar_length(),
            commit_message: default_commit_message(),
            push: default_true(),
            remote: None,
        }
    }
}

pub(crate) fn default_readme() -> String {
    "README.md".to_string()
}
pub(crate) fn default_bar_length() -> usize {
    DEFAULT_BAR_LENGTH
}
pub(crate) fn default_commit_message() -> String {
    "sync: update progress".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
