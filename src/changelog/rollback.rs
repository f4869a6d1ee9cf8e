//! Rollback releases
//!
//! A rollback re-releases an older version under a new version number. The
//! stale unreleased section is dropped and replaced by a dated heading that
//! explains the rollback; older sections are kept verbatim.

use super::{Changelog, EMPTY_CHANGELOG_HEADER, release_date};
use chrono::NaiveDate;

/// Versions involved in a rollback release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackVersions {
  /// Version whose contents are being re-released
  pub target: String,
  /// Version being rolled back
  pub rollback: String,
  /// Version number of the rollback release
  pub new: String,
}

/// Split into everything before the first heading and everything from the second heading on
pub fn split_unreleased(content: &str) -> (&str, String) {
  let changelog = Changelog::parse(content);
  (changelog.preamble(), changelog.later_sections())
}

/// The rewritten changelog
///
/// `content` is `None` when the changelog file does not exist; an empty file is
/// treated the same way.
pub fn rollback_changelog(content: Option<&str>, versions: &RollbackVersions, today: NaiveDate) -> String {
  let (before, after) = match content {
    Some(content) if !content.trim().is_empty() => split_unreleased(content),
    _ => (EMPTY_CHANGELOG_HEADER, String::new()),
  };

  let mut output = String::with_capacity(before.len() + after.len() + 256);
  output.push_str(before);
  if !before.is_empty() && !before.ends_with('\n') {
    output.push('\n');
  }
  output.push_str(&format!("## {} - {}\n", versions.new, release_date(today)));
  output.push('\n');
  output.push_str(&format!(
    "This release rolls back {} due to issues with that release. It is identical to {}.\n",
    versions.rollback, versions.target
  ));
  output.push('\n');
  output.push_str(&after);
  output
}
