//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Overwrite and delete confirmations (`input`)
//! - Subject list and format parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::{confirm_delete, overwrite_policy};
pub use parsing::{parse_format, parse_subjects};
