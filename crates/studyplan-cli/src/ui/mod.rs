//! UI primitives for the Studyplan CLI.
//!
//! - **Mode**: Output mode resolution (json, plain, table)
//! - **Render**: Schedule tables, plain lines, receipts

mod mode;
pub mod render;

pub use mode::OutputMode;
