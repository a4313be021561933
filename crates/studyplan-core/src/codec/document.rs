//! Encrypted-document codec.
//!
//! The schedule is serialized to JSON and the JSON bytes are encrypted with
//! the schedule key.

use crate::codec::ScheduleCodec;
use crate::crypto::{decrypt, encrypt, ScheduleKey};
use crate::error::{PlannerError, Result};
use crate::schedule::Schedule;

/// Codec for `.json` encrypted schedule documents.
#[derive(Debug, Clone)]
pub struct EncryptedDocumentCodec {
    key: ScheduleKey,
}

impl EncryptedDocumentCodec {
    pub fn new(key: ScheduleKey) -> Self {
        Self { key }
    }
}

impl ScheduleCodec for EncryptedDocumentCodec {
    fn encode(&self, schedule: &Schedule) -> Result<Vec<u8>> {
        let document = serde_json::to_vec_pretty(schedule)
            .map_err(|e| PlannerError::Format(format!("Failed to serialize schedule: {}", e)))?;
        encrypt(&document, &self.key)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Schedule> {
        let document = decrypt(bytes, &self.key)?;
        serde_json::from_slice(&document)
            .map_err(|e| PlannerError::Format(format!("Invalid schedule document: {}", e)))
    }
}
