pub mod schema;

pub use schema::{BarConfig, BarSettings, ItemConfig};

use coolbar_core::{CoolBarError, ItemLayout, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `BarConfig::default()` if
/// the file doesn't exist so the bar always has something to show.
pub fn load(path: impl AsRef<Path>) -> Result<BarConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(BarConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| CoolBarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| CoolBarError::Config(format!("TOML parse error: {e}")))
}

/// Read a saved arrangement.  `Ok(None)` when nothing was saved yet.
pub fn load_layout(path: impl AsRef<Path>) -> Result<Option<ItemLayout>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Persist an arrangement as pretty-printed JSON, creating parent directories.
pub fn save_layout(path: impl AsRef<Path>, layout: &ItemLayout) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(layout)?;
    std::fs::write(path, raw)?;
    tracing::debug!("Saved layout of {} items to '{}'", layout.len(), path.display());
    Ok(())
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    config_dir().join("coolbar.toml")
}

/// Return the default saved-layout path, next to the config file.
pub fn layout_path() -> PathBuf {
    config_dir().join("layout.json")
}

fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("coolbar")
}
