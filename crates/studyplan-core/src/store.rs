//! Persistence façade.
//!
//! [`ScheduleStore`] saves and loads schedules in any [`Format`], picking
//! the codec from the requested format on save and from the file extension
//! on load. The key store is consulted only for encrypted documents.
//! Overwriting an existing file always goes through an [`OverwritePolicy`]
//! supplied by the caller.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{
    DelimitedCodec, EncryptedDocumentCodec, Format, ScheduleCodec, SpreadsheetCodec,
};
use crate::crypto::KeyStore;
use crate::error::{PlannerError, Result};
use crate::schedule::Schedule;

/// Decides whether an existing file may be overwritten.
///
/// The decision belongs to the caller (a prompt, a dialog, a `--force`
/// flag); the store only asks.
pub trait OverwritePolicy {
    fn allow_overwrite(&mut self, path: &Path) -> bool;
}

impl<F> OverwritePolicy for F
where
    F: FnMut(&Path) -> bool,
{
    fn allow_overwrite(&mut self, path: &Path) -> bool {
        self(path)
    }
}

/// Policy that always permits overwriting.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl OverwritePolicy for AlwaysOverwrite {
    fn allow_overwrite(&mut self, _path: &Path) -> bool {
        true
    }
}

/// Policy that never permits overwriting.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverOverwrite;

impl OverwritePolicy for NeverOverwrite {
    fn allow_overwrite(&mut self, _path: &Path) -> bool {
        false
    }
}

/// Append the format's canonical extension unless `path` already ends with it.
///
/// `plan` becomes `plan.csv`; `plan.txt` becomes `plan.txt.csv`.
pub fn resolve_save_path(path: &Path, format: Format) -> PathBuf {
    if Format::from_path(path) == Some(format) {
        return path.to_path_buf();
    }
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Save/load façade over the three schedule codecs.
#[derive(Debug, Clone)]
pub struct ScheduleStore<K: KeyStore> {
    keys: K,
}

impl<K: KeyStore> ScheduleStore<K> {
    pub fn new(keys: K) -> Self {
        Self { keys }
    }

    pub fn key_store(&self) -> &K {
        &self.keys
    }

    fn codec(&self, format: Format) -> Result<Box<dyn ScheduleCodec>> {
        tracing::debug!(%format, "Selecting codec");
        let codec: Box<dyn ScheduleCodec> = match format {
            Format::EncryptedDocument => {
                Box::new(EncryptedDocumentCodec::new(self.keys.get_or_create_key()?))
            }
            Format::Spreadsheet => Box::new(SpreadsheetCodec),
            Format::Delimited => Box::new(DelimitedCodec),
        };
        Ok(codec)
    }

    /// Encode a schedule in memory.
    pub fn encode(&self, schedule: &Schedule, format: Format) -> Result<Vec<u8>> {
        self.codec(format)?.encode(schedule)
    }

    /// Decode a schedule from in-memory bytes.
    pub fn decode(&self, bytes: &[u8], format: Format) -> Result<Schedule> {
        self.codec(format)?.decode(bytes)
    }

    /// Save a schedule, returning the path actually written.
    ///
    /// The canonical extension for `format` is appended when missing. If the
    /// resulting file exists, `policy` decides whether to replace it. The
    /// write is atomic.
    ///
    /// # Errors
    ///
    /// - `PlannerError::OverwriteDeclined` if the file exists and `policy` refuses
    /// - `PlannerError::KeyIo` / `PlannerError::Crypto` for encrypted documents
    /// - `PlannerError::Storage` if the file cannot be written
    pub fn save(
        &self,
        schedule: &Schedule,
        path: &Path,
        format: Format,
        policy: &mut dyn OverwritePolicy,
    ) -> Result<PathBuf> {
        let target = resolve_save_path(path, format);
        if target.exists() && !policy.allow_overwrite(&target) {
            return Err(PlannerError::OverwriteDeclined(target));
        }

        let bytes = self.encode(schedule, format)?;
        crate::fs::write_atomic(&target, &bytes)?;

        tracing::debug!(
            path = %target.display(),
            %format,
            days = schedule.len(),
            "Saved schedule"
        );
        Ok(target)
    }

    /// Load a schedule, choosing the codec from the file extension.
    ///
    /// # Errors
    ///
    /// - `PlannerError::FileNotFound` if `path` does not exist
    /// - `PlannerError::UnsupportedFormat` for an unknown extension
    /// - `PlannerError::Format`, `PlannerError::Decryption` or
    ///   `PlannerError::KeyIo` from the codec, unchanged
    pub fn load(&self, path: &Path) -> Result<Schedule> {
        if !path.exists() {
            return Err(PlannerError::FileNotFound(path.to_path_buf()));
        }
        let format = Format::from_path(path)
            .ok_or_else(|| PlannerError::UnsupportedFormat(path.display().to_string()))?;

        let bytes = fs::read(path).map_err(|e| {
            PlannerError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let schedule = self.decode(&bytes, format)?;

        tracing::debug!(
            path = %path.display(),
            %format,
            days = schedule.len(),
            "Loaded schedule"
        );
        Ok(schedule)
    }
}

/// List schedule files directly inside `dir`, sorted by file name.
///
/// Only files whose extension maps to a [`Format`] are returned.
pub fn list_schedules(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PlannerError::FileNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && Format::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Delete a schedule file.
///
/// Refuses paths that are not schedule files, so the key file cannot be
/// removed through this function.
pub fn delete_schedule(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(PlannerError::FileNotFound(path.to_path_buf()));
    }
    if Format::from_path(path).is_none() {
        return Err(PlannerError::UnsupportedFormat(path.display().to_string()));
    }
    fs::remove_file(path).map_err(|e| {
        PlannerError::Storage(format!("Failed to delete {}: {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), "Deleted schedule");
    Ok(())
}
