use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use eardrill_tutor::{Mode, PlaybackConfig};

/// Preferences persisted between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DrillSettings {
    pub mode: Mode,
    pub playback: PlaybackConfig,
}

pub fn default_settings_path() -> Option<PathBuf> {
    let base = dirs::config_dir()?;
    Some(base.join("eardrill").join("settings.json"))
}

/// Missing files fall back to defaults; unreadable or malformed ones are errors.
pub fn load_settings(path: &Path) -> Result<DrillSettings> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(DrillSettings::default());
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}

pub fn save_settings(path: &Path, settings: &DrillSettings) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    Ok(())
}
