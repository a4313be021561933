//! CLI error types for structured error handling.
//!
//! Core errors and CLI-specific errors both map to exit codes here, so every
//! command reports failures the same way.

use std::fmt;

use studyplan_core::PlannerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input
    InvalidInput(String),

    /// The user answered "no" to a confirmation
    Declined(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Declined(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Create a Declined error.
    pub fn declined(message: impl Into<String>) -> Self {
        CliError::Declined(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Declined(_) => exit_codes::DECLINED,
        }
    }
}

/// Exit code for a core error.
pub fn planner_exit_code(err: &PlannerError) -> i32 {
    match err {
        PlannerError::InvalidInput(_) | PlannerError::UnsupportedFormat(_) => {
            exit_codes::INVALID_INPUT
        }
        PlannerError::FileNotFound(_) => exit_codes::NOT_FOUND,
        PlannerError::Decryption(_) => exit_codes::DECRYPTION_FAILED,
        PlannerError::Format(_) => exit_codes::INVALID_DATA,
        PlannerError::KeyIo { .. } => exit_codes::KEY_ERROR,
        PlannerError::OverwriteDeclined(_) => exit_codes::DECLINED,
        PlannerError::Crypto(_) | PlannerError::Storage(_) => 1,
    }
}

/// Exit code for any error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(planner) = err.downcast_ref::<PlannerError>() {
        return planner_exit_code(planner);
    }
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    1
}

/// Hint printed under the error message, if there is a useful one.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<PlannerError>()? {
        PlannerError::OverwriteDeclined(_) => {
            Some("Hint: Pass --force to overwrite, or choose another name.")
        }
        PlannerError::UnsupportedFormat(_) => {
            Some("Hint: Schedules are stored as .json (encrypted), .xlsx, or .csv files.")
        }
        PlannerError::Decryption(_) => Some(
            "Hint: Encrypted schedules can only be opened with the key file of the directory they were saved in.",
        ),
        PlannerError::FileNotFound(_) => Some("Hint: Run `studyplan list` to see saved schedules."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_planner_errors_map_to_distinct_codes() {
        let missing = anyhow::Error::new(PlannerError::FileNotFound(PathBuf::from("x.csv")));
        assert_eq!(exit_code_for(&missing), exit_codes::NOT_FOUND);

        let unsupported = anyhow::Error::new(PlannerError::UnsupportedFormat("x.txt".into()));
        assert_eq!(exit_code_for(&unsupported), exit_codes::INVALID_INPUT);

        let tampered = anyhow::Error::new(PlannerError::Decryption("bad mac".into()));
        assert_eq!(exit_code_for(&tampered), exit_codes::DECRYPTION_FAILED);

        let declined = anyhow::Error::new(PlannerError::OverwriteDeclined(PathBuf::from("x")));
        assert_eq!(exit_code_for(&declined), exit_codes::DECLINED);
    }

    #[test]
    fn test_cli_and_other_errors() {
        let input = anyhow::Error::new(CliError::invalid_input("bad"));
        assert_eq!(exit_code_for(&input), exit_codes::INVALID_INPUT);

        let other = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&other), 1);
        assert!(hint_for(&other).is_none());
    }
}
