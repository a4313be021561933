//! Age encryption/decryption utilities.
//!
//! Schedule documents are encrypted with age's passphrase recipient, using
//! the base64 text of the [`ScheduleKey`] as the passphrase. Age
//! authenticates both its header and payload, so any modification of the
//! ciphertext is detected on decrypt.

use std::io::{Read, Write};
use std::iter;

use age::secrecy::SecretString;

use crate::crypto::key::ScheduleKey;
use crate::error::{PlannerError, Result};

/// Encrypt data with the schedule key.
///
/// # Examples
///
/// ```
/// use studyplan_core::crypto::{decrypt, encrypt, ScheduleKey};
///
/// let key = ScheduleKey::generate().unwrap();
/// let encrypted = encrypt(b"secret data", &key).unwrap();
/// assert_eq!(decrypt(&encrypted, &key).unwrap(), b"secret data");
/// ```
pub fn encrypt(data: &[u8], key: &ScheduleKey) -> Result<Vec<u8>> {
    let passphrase = key.passphrase();
    // Passphrase recipients always run scrypt, so each call takes on the
    // order of a second even though the key text is already random.
    let encryptor =
        age::Encryptor::with_user_passphrase(SecretString::from(passphrase.to_string()));

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(&mut encrypted)
        .map_err(|e| PlannerError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(data)
        .map_err(|e| PlannerError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .map_err(|e| PlannerError::Crypto(format!("Encryption finish failed: {}", e)))?;

    Ok(encrypted)
}

/// Decrypt and verify data encrypted with [`encrypt`].
///
/// # Errors
///
/// Returns `PlannerError::Decryption` if:
/// - The key does not match the one used to encrypt
/// - The data is corrupted, truncated, or tampered with
/// - The data is not an age file at all
pub fn decrypt(encrypted_data: &[u8], key: &ScheduleKey) -> Result<Vec<u8>> {
    let decryptor = age::Decryptor::new(encrypted_data)
        .map_err(|e| PlannerError::Decryption(format!("Unreadable ciphertext header: {}", e)))?;

    let passphrase = key.passphrase();
    let identity = age::scrypt::Identity::new(SecretString::from(passphrase.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => {
                PlannerError::Decryption("Wrong key or corrupted header".to_string())
            }
            _ => PlannerError::Decryption(format!("Integrity check failed: {}", e)),
        })?;

    let mut decrypted = Vec::new();
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| PlannerError::Decryption(format!("Payload integrity check failed: {}", e)))?;

    Ok(decrypted)
}
