//! Verification checks run as CI steps
//!
//! All checks implement the `Check` trait and are executed through a
//! `CheckRunner`, which runs every check even when an earlier one fails and
//! reports failures as workflow error annotations.
//!
//! # Checks
//!
//! - **expected-queries-ran** / **unexpected-queries-absent**: SARIF query sets
//! - **config-matches**: Code scanning configuration equality
//! - **artifact-scan-finished**: Debug artifact scan completed

mod artifact_scan;
mod config_diff;
mod runner;
mod sarif_queries;
mod trait_def;

pub use artifact_scan::{ARTIFACT_SCAN_FINISHED_ENV, ArtifactScanFinished};
pub use config_diff::{ConfigMatches, load_actual, parse_expected, render_yaml};
pub use runner::CheckRunner;
pub use sarif_queries::{ExpectedQueriesRan, RuleSet, UnexpectedQueriesAbsent, parse_query_list};
