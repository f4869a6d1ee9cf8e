//! CLI commands for action-release
//!
//! One function per CI step. Each command takes every input as an explicit
//! parameter; clap resolves flags and environment variables in `main`.
//!
//! ## Release branches
//! - **backport plan**: Compute the source and target branches of a release
//!
//! ## Changelog
//! - **changelog extract**: Release notes for a single version
//! - **changelog rollback**: Changelog for a rollback release
//! - **changelog finalize**: Date the `[UNRELEASED]` section
//! - **changelog backport**: Renumber a release for an older major version
//!
//! ## Verification
//! - **verify sarif**: Expected / unexpected queries in a SARIF file
//! - **verify config**: Code scanning configuration equality
//! - **verify artifact-scan**: Debug artifact scan completed
//!
//! ## Updates
//! - **update enterprise-versions**: Supported GHES range
//! - **update bundle**: Bundle and CLI versions from a release event

pub mod backport;
pub mod changelog;
pub mod update;
pub mod verify;

pub use backport::run_backport_plan;
pub use changelog::{run_changelog_backport, run_changelog_extract, run_changelog_finalize, run_changelog_rollback};
pub use update::{run_update_bundle, run_update_enterprise_versions};
pub use verify::{run_verify_artifact_scan, run_verify_config, run_verify_sarif};
