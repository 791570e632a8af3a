pub mod schema;
pub mod watcher;

pub use schema::{ProgressConfig, RopeConfig, StyleConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use rope_core::{Result, RopeError};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  A missing file is not an error:
/// the widget must always come up with sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<RopeConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(RopeConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw)
        .map_err(|e| RopeError::Config(format!("'{}': {e}", path.display())))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("rope").join("rope.toml")
}
