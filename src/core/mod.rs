//! Core building blocks shared by every command
//!
//! - **config**: `releases.ini` parsing and the enterprise support window
//! - **error**: Error types with contextual help messages and exit codes

pub mod config;
pub mod error;
