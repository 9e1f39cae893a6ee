//! Config loading and validation.

use super::model::{Config, CONFIG_FILE_NAME};
use crate::error::{Result, SyncError};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SyncError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SyncError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.progress-sync.yaml` from `root`, falling back to defaults when
    /// the file does not exist.
    pub fn load_from_root<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        Self::load(&path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SyncError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `readme` must be non-empty
    /// - `commit_message` must be non-empty
    /// - `bar_length` must be positive
    /// - `remote`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.readme.trim().is_empty() {
            return Err(SyncError::UserError(
                "config validation failed: readme must not be empty".to_string(),
            ));
        }

        if self.commit_message.trim().is_empty() {
            return Err(SyncError::UserError(
                "config validation failed: commit_message must not be empty".to_string(),
            ));
        }

        if self.bar_length == 0 {
            return Err(SyncError::UserError(
                "config validation failed: bar_length must be greater than 0".to_string(),
            ));
        }

        if let Some(remote) = &self.remote
            && remote.trim().is_empty()
        {
            return Err(SyncError::UserError(
                "config validation failed: remote must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }
}
