//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (schedule file, working directory).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, arguments, or unsupported file format.
    pub const INVALID_INPUT: i32 = 4;

    /// Encrypted schedule failed integrity verification.
    pub const DECRYPTION_FAILED: i32 = 5;

    /// Schedule file contents are malformed or ambiguous.
    pub const INVALID_DATA: i32 = 6;

    /// Key file could not be read or created.
    pub const KEY_ERROR: i32 = 7;

    /// The user declined an overwrite or deletion.
    pub const DECLINED: i32 = 8;
}
