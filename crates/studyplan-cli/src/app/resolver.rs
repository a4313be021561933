//! Path resolution for the config file and the working directory.

use std::path::{Path, PathBuf};

use studyplan_core::PlannerError;

use crate::config::default_config_path;

/// Resolve the config file path, checking STUDYPLAN_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("STUDYPLAN_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Pick the working directory: flag or env first, then config, then cwd.
///
/// The directory must already exist.
pub fn resolve_working_dir(
    flag: Option<&str>,
    configured: Option<&str>,
) -> anyhow::Result<PathBuf> {
    let dir = match flag.or(configured) {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => std::env::current_dir()?,
    };
    if !dir.is_dir() {
        return Err(PlannerError::FileNotFound(dir).into());
    }
    Ok(dir)
}

/// Resolve a user-supplied file argument against the working directory.
///
/// Absolute paths are kept as-is.
pub fn resolve_in_dir(dir: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}
