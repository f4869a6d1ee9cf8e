//! Stamp the unreleased heading at release time

use super::{EMPTY_CHANGELOG, release_date};
use chrono::NaiveDate;

/// Marker carried by the unreleased heading
pub const UNRELEASED_MARKER: &str = "[UNRELEASED]";

/// Replace the first `[UNRELEASED]` marker with `{version} - {date}`
///
/// A missing changelog (`None`) starts from a placeholder document. Returns
/// `None` when the document has no marker to replace.
pub fn finalize_changelog(content: Option<&str>, version: &str, today: NaiveDate) -> Option<String> {
  let content = content.unwrap_or(EMPTY_CHANGELOG);
  if !content.contains(UNRELEASED_MARKER) {
    return None;
  }

  let heading = format!("{} - {}", version, release_date(today));
  Some(content.replacen(UNRELEASED_MARKER, &heading, 1))
}
