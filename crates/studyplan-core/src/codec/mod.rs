//! Schedule file formats.
//!
//! Each format has a codec that turns a [`Schedule`] into file bytes and
//! back. All codecs satisfy `decode(encode(s)) == s`.
//!
//! | Format | Extension | Contents |
//! |--------|-----------|----------|
//! | [`Format::EncryptedDocument`] | `json` | age ciphertext of the JSON document |
//! | [`Format::Spreadsheet`] | `xlsx` | `Day, Subject, Hours` rows on the first sheet |
//! | [`Format::Delimited`] | `csv` | `Day,Subject,Hours` rows, comma separated |

pub mod delimited;
pub mod document;
pub mod spreadsheet;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::schedule::Schedule;

pub use delimited::DelimitedCodec;
pub use document::EncryptedDocumentCodec;
pub use spreadsheet::SpreadsheetCodec;

/// Encode/decode pair for one file format.
pub trait ScheduleCodec {
    /// Serialize a schedule to file bytes.
    fn encode(&self, schedule: &Schedule) -> Result<Vec<u8>>;

    /// Parse file bytes back into a schedule.
    fn decode(&self, bytes: &[u8]) -> Result<Schedule>;
}

/// Supported schedule file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Encrypted JSON document
    #[serde(rename = "json")]
    EncryptedDocument,
    /// Excel workbook
    #[serde(rename = "xlsx")]
    Spreadsheet,
    /// Comma-separated text
    #[serde(rename = "csv")]
    Delimited,
}

impl Format {
    pub const ALL: [Format; 3] = [
        Format::EncryptedDocument,
        Format::Spreadsheet,
        Format::Delimited,
    ];

    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::EncryptedDocument => "json",
            Format::Spreadsheet => "xlsx",
            Format::Delimited => "csv",
        }
    }

    /// Format for a file extension (ASCII case-insensitive, no dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| extension.eq_ignore_ascii_case(format.extension()))
    }

    /// Format implied by a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether this format needs the encryption key.
    pub fn is_encrypted(&self) -> bool {
        matches!(self, Format::EncryptedDocument)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim().trim_start_matches('.');
        if let Some(format) = Self::from_extension(trimmed) {
            return Ok(format);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "encrypted" | "document" => Ok(Format::EncryptedDocument),
            "spreadsheet" | "excel" => Ok(Format::Spreadsheet),
            "delimited" | "text" => Ok(Format::Delimited),
            _ => Err(PlannerError::UnsupportedFormat(format!(
                "{} (use json, xlsx, or csv)",
                value
            ))),
        }
    }
}
