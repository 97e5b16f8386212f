//! Local document storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the JSON documents. Empty means the platform data dir.
    #[serde(default)]
    pub data_dir: String,

    /// Pretty-print stored documents.
    #[serde(default)]
    pub pretty: bool,
}

impl StorageConfig {
    /// Whether an explicit directory was configured.
    pub fn has_data_dir(&self) -> bool {
        !self.data_dir.trim().is_empty()
    }

    /// The directory documents live in.
    ///
    /// Falls back to `{platform data dir}/ontime` (e.g. `~/.local/share/ontime`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DataDirUnavailable` when nothing is configured and
    /// the platform reports no data directory.
    pub fn resolved_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if self.has_data_dir() {
            return Ok(PathBuf::from(self.data_dir.trim()));
        }
        dirs::data_dir()
            .map(|p| p.join("ontime"))
            .ok_or(ConfigError::DataDirUnavailable)
    }
}
