//! Application-level utilities for the Studyplan CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the working directory
//! - The per-invocation application context

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_in_dir, resolve_working_dir};
