use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use studyplan_core::Format;

/// Default action log file name inside the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "action_log.txt";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StudyplanConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub history: HistorySection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Working directory for schedules, key and action log
    pub directory: Option<String>,
    /// Key file override (defaults to `<directory>/encryption_key.key`)
    pub key_file: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    pub format: Format,
    pub hours_per_day: Option<f64>,
    pub days: Option<u32>,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            format: Format::EncryptedDocument,
            hours_per_day: None,
            days: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySection {
    pub enabled: bool,
    pub file: String,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            enabled: true,
            file: DEFAULT_HISTORY_FILE.to_string(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<StudyplanConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("studyplan"));
        }
    }
    Ok(home_dir()?.join(".config").join("studyplan"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
