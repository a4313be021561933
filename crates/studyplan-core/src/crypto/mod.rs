//! Cryptographic operations for Studyplan.
//!
//! This module owns the schedule encryption key and the authenticated
//! encryption used by the encrypted-document format:
//! - **Key store**: one random 32-byte key per working directory, created on
//!   first use and reused afterwards
//! - **Age**: Modern, simple encryption (https://age-encryption.org/) with an
//!   authenticated header and ChaCha20-Poly1305 payload
//!
//! ## Threat Model
//!
//! We defend against:
//! - Reading a copied schedule file without the key file
//! - Silent tampering with or corruption of an encrypted schedule
//!
//! We do NOT defend against:
//! - Access to the working directory that holds the key file
//! - Key loss: deleting the key file makes existing encrypted schedules unreadable

pub mod encryption;
pub mod key;

pub use encryption::{decrypt, encrypt};
pub use key::{FileKeyStore, KeyStore, MemoryKeyStore, ScheduleKey, KEY_FILE_NAME, KEY_LENGTH};
