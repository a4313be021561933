//! # Studyplan Core
//!
//! Core library for Studyplan - a study-time planner that persists its
//! schedules as encrypted documents, spreadsheets, or CSV files.
//!
//! This crate provides the schedule model, the generator, the format codecs
//! and the persistence façade independent of any front end.
//!
//! ## Architecture
//!
//! - **schedule**: Schedule/Day/Allocation model and row reconstruction
//! - **generator**: Even split of a daily hour budget across subjects
//! - **crypto**: Key store and authenticated encryption
//! - **codec**: Encrypted-document, spreadsheet and delimited-text codecs
//! - **store**: Save/load façade with overwrite policy and format dispatch

pub mod codec;
pub mod crypto;
pub mod error;
pub mod fs;
pub mod generator;
pub mod schedule;
pub mod store;

pub use codec::{Format, ScheduleCodec};
pub use crypto::{FileKeyStore, KeyStore, MemoryKeyStore, ScheduleKey};
pub use error::{PlannerError, Result};
pub use generator::generate;
pub use schedule::{Allocation, Day, Row, Schedule};
pub use store::{
    delete_schedule, list_schedules, resolve_save_path, AlwaysOverwrite, NeverOverwrite,
    OverwritePolicy, ScheduleStore,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
