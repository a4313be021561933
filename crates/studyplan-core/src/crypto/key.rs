//! Schedule encryption key and its stores.
//!
//! The key is 32 bytes of OS randomness. [`FileKeyStore`] persists it as raw
//! bytes in a fixed file inside the working directory; [`MemoryKeyStore`]
//! keeps it in memory for tests and embedding callers.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::error::{PlannerError, Result};

/// File name of the key inside a working directory.
pub const KEY_FILE_NAME: &str = "encryption_key.key";

/// Length of the key in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// Symmetric key for encrypted schedule documents.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct ScheduleKey {
    key: [u8; KEY_LENGTH],
}

impl ScheduleKey {
    /// Generate a fresh key from the OS random number generator.
    pub fn generate() -> Result<Self> {
        let mut key = [0u8; KEY_LENGTH];
        getrandom::getrandom(&mut key)
            .map_err(|e| PlannerError::Crypto(format!("Failed to generate key bytes: {}", e)))?;
        Ok(Self { key })
    }

    /// Build a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `bytes` is not exactly
    /// [`KEY_LENGTH`] bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_LENGTH] = bytes.try_into().map_err(|_| {
            PlannerError::InvalidInput(format!(
                "Key must be {} bytes (got {})",
                KEY_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self { key })
    }

    /// Get a reference to the raw key bytes.
    ///
    /// Avoid storing or logging this value.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }

    /// Text form of the key handed to age as its passphrase.
    pub(crate) fn passphrase(&self) -> Zeroizing<String> {
        Zeroizing::new(STANDARD.encode(self.key))
    }
}

impl std::fmt::Debug for ScheduleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Source of the schedule encryption key.
///
/// Implementations return the same key on every call for as long as the
/// store exists.
pub trait KeyStore {
    /// Return the persisted key, creating and persisting one on first use.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::KeyIo` if the key cannot be read or created.
    fn get_or_create_key(&self) -> Result<ScheduleKey>;
}

/// Key store backed by a raw key file.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    path: PathBuf,
}

impl FileKeyStore {
    /// Key store using [`KEY_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(KEY_FILE_NAME),
        }
    }

    /// Key store using an explicit key file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn key_io(&self, message: impl Into<String>) -> PlannerError {
        PlannerError::KeyIo {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn read_key(&self) -> Result<ScheduleKey> {
        let bytes = Zeroizing::new(
            fs::read(&self.path).map_err(|e| self.key_io(format!("read failed: {}", e)))?,
        );
        ScheduleKey::from_bytes(&bytes).map_err(|_| {
            self.key_io(format!(
                "expected {} bytes of key material, found {}",
                KEY_LENGTH,
                bytes.len()
            ))
        })
    }

    fn create_key(&self) -> Result<ScheduleKey> {
        let key = ScheduleKey::generate()?;
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!(path = %self.path.display(), "Key file appeared concurrently; reading it");
                return self.read_key();
            }
            Err(err) => return Err(self.key_io(format!("create failed: {}", err))),
        };

        if let Err(err) = file.write_all(key.as_bytes()).and_then(|_| file.sync_all()) {
            drop(file);
            let _ = fs::remove_file(&self.path);
            return Err(self.key_io(format!("write failed: {}", err)));
        }

        tracing::debug!(path = %self.path.display(), "Created new encryption key");
        Ok(key)
    }
}

impl KeyStore for FileKeyStore {
    fn get_or_create_key(&self) -> Result<ScheduleKey> {
        if self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Loading encryption key");
            self.read_key()
        } else {
            self.create_key()
        }
    }
}

/// Key store that keeps a single key in memory.
#[derive(Debug, Clone)]
pub struct MemoryKeyStore {
    key: ScheduleKey,
}

impl MemoryKeyStore {
    /// In-memory store holding a freshly generated key.
    pub fn new() -> Result<Self> {
        Ok(Self {
            key: ScheduleKey::generate()?,
        })
    }

    /// In-memory store holding `key`.
    pub fn with_key(key: ScheduleKey) -> Self {
        Self { key }
    }
}

impl KeyStore for MemoryKeyStore {
    fn get_or_create_key(&self) -> Result<ScheduleKey> {
        Ok(self.key.clone())
    }
}

impl<K: KeyStore + ?Sized> KeyStore for &K {
    fn get_or_create_key(&self) -> Result<ScheduleKey> {
        (**self).get_or_create_key()
    }
}
