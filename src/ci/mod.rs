//! GitHub Actions runtime integration
//!
//! - **log**: `::group::` sections and `::error::` annotations on stdout
//! - **output**: `key=value` step outputs appended to `$GITHUB_OUTPUT`

pub mod log;
pub mod output;

pub use output::OutputSink;
