//! Changelog commands
//!
//! `extract` and `rollback` only print; `finalize` and `backport` rewrite the
//! working copy in place.

use crate::changelog::{self, backport, extract, finalize, rollback};
use crate::ci::{self, OutputSink};
use crate::core::error::{ReleaseResult, ResultExt};
use crate::release::package_json;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::Path;

fn today() -> NaiveDate {
  Local::now().date_naive()
}

/// Print the release notes for `version_tag`
pub fn run_changelog_extract(changelog_path: &Path, version_tag: &str) -> ReleaseResult<()> {
  let content = changelog::load(changelog_path)?;
  if content.is_none() {
    tracing::debug!(path = %changelog_path.display(), "changelog not found");
  }

  print!("{}", extract::extract_release_notes(content.as_deref(), version_tag));
  Ok(())
}

/// Print the changelog of a rollback release
pub fn run_changelog_rollback(changelog_path: &Path, versions: &rollback::RollbackVersions) -> ReleaseResult<()> {
  let content = changelog::load(changelog_path)?;
  print!("{}", rollback::rollback_changelog(content.as_deref(), versions, today()));
  Ok(())
}

/// Replace the `[UNRELEASED]` heading with the version and today's date
pub fn run_changelog_finalize(changelog_path: &Path, version: &str) -> ReleaseResult<()> {
  let content = changelog::load(changelog_path)?;

  let Some(updated) = finalize::finalize_changelog(content.as_deref(), version, today()) else {
    ci::log::warning(&format!(
      "No {} section found in {}",
      finalize::UNRELEASED_MARKER,
      changelog_path.display()
    ));
    return Ok(());
  };

  fs::write(changelog_path, updated).with_context(|| format!("Failed to write {}", changelog_path.display()))?;
  println!("✅ Finalized {} for {}", changelog_path.display(), version);
  Ok(())
}

/// Renumber the version and changelog of a release for an older release branch
pub fn run_changelog_backport(
  source_branch: &str,
  target_branch: &str,
  changelog_path: &Path,
  package_json_path: &Path,
  output: &OutputSink,
) -> ReleaseResult<()> {
  let source_major = backport::branch_major_version(source_branch)?;
  let target_major = backport::branch_major_version(target_branch)?;

  let current_version = package_json::read_version(package_json_path)?;
  let version = package_json::backport_version(&current_version, target_major)?;
  println!("Backporting {} ({}) to {} ({})", current_version, source_branch, version, target_branch);

  // Both rewrites are computed before either file is touched.
  let manifest = package_json::renumbered(package_json_path, &current_version, &version)?;
  let content = fs::read_to_string(changelog_path)
    .with_context(|| format!("Failed to read {}", changelog_path.display()))?;
  let migrated = backport::migrate_changelog_for_backport(&content, source_major, target_major)?;

  fs::write(package_json_path, manifest)
    .with_context(|| format!("Failed to write {}", package_json_path.display()))?;
  fs::write(changelog_path, migrated).with_context(|| format!("Failed to write {}", changelog_path.display()))?;

  output.set("version", &version)?;
  Ok(())
}
