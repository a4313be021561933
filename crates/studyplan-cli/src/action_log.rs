//! Append-only log of user actions in the working directory.
//!
//! Each line is `<RFC3339 timestamp>\t<action>`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord {
    pub timestamp: DateTime<Utc>,
    pub action: String,
}

pub struct ActionLog {
    path: PathBuf,
}

impl ActionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an action. Never fails the caller; problems become warnings.
    pub fn append(&self, action: &str) {
        if let Err(err) = self.try_append(action, Utc::now()) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "Failed to write action log"
            );
        }
    }

    fn try_append(&self, action: &str, at: DateTime<Utc>) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // Tabs and newlines would break the line format.
        let action = action.replace(['\t', '\n', '\r'], " ");
        writeln!(
            file,
            "{}\t{}",
            at.to_rfc3339_opts(SecondsFormat::Secs, true),
            action
        )
    }

    /// Read recorded actions, oldest first. `limit` keeps the newest N.
    ///
    /// A missing log reads as empty. Lines that do not parse are skipped.
    pub fn read(&self, limit: Option<usize>) -> anyhow::Result<Vec<ActionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            anyhow::anyhow!("Failed to read action log {}: {}", self.path.display(), e)
        })?;

        let mut records: Vec<ActionRecord> = contents.lines().filter_map(parse_line).collect();
        if let Some(limit) = limit {
            let skip = records.len().saturating_sub(limit);
            records.drain(..skip);
        }
        Ok(records)
    }
}

fn parse_line(line: &str) -> Option<ActionRecord> {
    let (timestamp, action) = line.split_once('\t')?;
    let timestamp = DateTime::parse_from_rfc3339(timestamp)
        .ok()?
        .with_timezone(&Utc);
    Some(ActionRecord {
        timestamp,
        action: action.to_string(),
    })
}
