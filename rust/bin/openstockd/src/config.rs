//! Server configuration file handling.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Server-side configuration, loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the SQLite database.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl ServerConfig {
    /// Resolve a context name to `/etc/openstock/<name>.toml`.
    /// A value containing `/` or `.` is treated as a path and used directly.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/openstock/{}.toml", name_or_path))
        }
    }

    /// Load configuration from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Verify configuration is usable before starting.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.storage.data_dir.is_empty() {
        anyhow::bail!("Storage data_dir is empty in configuration.");
    }
    Ok(())
}
