//! Application context for the Studyplan CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file and working directory.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use studyplan_core::{FileKeyStore, ScheduleStore};

use crate::action_log::ActionLog;
use crate::cli::Cli;
use crate::config::{read_config, StudyplanConfig};

use super::resolver::{resolve_config_path, resolve_in_dir, resolve_working_dir};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<StudyplanConfig>,
    working_dir: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            working_dir: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing config file yields the defaults.
    pub fn config(&self) -> anyhow::Result<&StudyplanConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(StudyplanConfig::default());
            }
            read_config(&path)
        })
    }

    /// Directory holding schedules, the key file and the action log.
    pub fn working_dir(&self) -> anyhow::Result<&Path> {
        let dir = self.working_dir.get_or_try_init(|| {
            let configured = self.config()?.storage.directory.as_deref();
            resolve_working_dir(self.cli.dir.as_deref(), configured)
        })?;
        Ok(dir.as_path())
    }

    /// Resolve a file argument relative to the working directory.
    pub fn resolve(&self, value: &str) -> anyhow::Result<PathBuf> {
        Ok(resolve_in_dir(self.working_dir()?, value))
    }

    /// Build a schedule store backed by the configured key file.
    pub fn store(&self) -> anyhow::Result<ScheduleStore<FileKeyStore>> {
        let dir = self.working_dir()?;
        let keys = match self.config()?.storage.key_file.as_deref() {
            Some(key_file) => FileKeyStore::at_path(resolve_in_dir(dir, key_file)),
            None => FileKeyStore::in_dir(dir),
        };
        tracing::debug!(key_file = %keys.path().display(), "Using key file");
        Ok(ScheduleStore::new(keys))
    }

    /// The action log, or `None` when history is disabled.
    pub fn action_log(&self) -> anyhow::Result<Option<ActionLog>> {
        let history = &self.config()?.history;
        if !history.enabled {
            return Ok(None);
        }
        let path = resolve_in_dir(self.working_dir()?, &history.file);
        Ok(Some(ActionLog::new(path)))
    }

    /// Record an action. Failures are logged and otherwise ignored.
    pub fn record(&self, action: &str) {
        match self.action_log() {
            Ok(Some(log)) => log.append(action),
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "Could not open action log"),
        }
    }
}
