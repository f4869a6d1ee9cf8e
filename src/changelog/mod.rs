//! `CHANGELOG.md` handling for releases and rollbacks
//!
//! The changelog is a markdown document whose releases are introduced by
//! level-2 headings (`## `). The first section is conventionally the
//! unreleased one; every later section is historical and must be reproduced
//! byte-for-byte by any rewrite.
//!
//! - **extract**: Release notes snippet for a GitHub release
//! - **rollback**: Replace the unreleased section with a rollback entry
//! - **finalize**: Stamp the `[UNRELEASED]` heading with a version and date
//! - **backport**: Migrate release notes onto an older major version

pub mod backport;
pub mod extract;
pub mod finalize;
pub mod rollback;

use crate::core::error::{ReleaseResult, ResultExt};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::Path;

/// Default changelog location, relative to the repository root
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";

/// Title used when no changelog exists yet
pub const EMPTY_CHANGELOG_HEADER: &str = "# CodeQL Action Changelog\n\n";

/// Changelog with a single placeholder section, used when finalizing from scratch
pub const EMPTY_CHANGELOG: &str = "# CodeQL Action Changelog\n\n## [UNRELEASED]\n\nNo user facing changes.\n\n";

/// Whether `line` introduces a release section
pub fn is_heading(line: &str) -> bool {
  line.starts_with("## ")
}

/// Release date as written in headings, e.g. `18 Oct 2026`
pub fn release_date(today: NaiveDate) -> String {
  today.format("%d %b %Y").to_string()
}

/// Read a changelog, returning `None` when the file does not exist
pub fn load(path: &Path) -> ReleaseResult<Option<String>> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
    Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
  }
}

/// A changelog split at its headings
///
/// All parts borrow from the original text, so concatenating the preamble and
/// every section reproduces the document exactly (line endings included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog<'a> {
  preamble: &'a str,
  sections: Vec<&'a str>,
}

impl<'a> Changelog<'a> {
  pub fn parse(content: &'a str) -> Self {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
      if is_heading(line) {
        starts.push(offset);
      }
      offset += line.len();
    }

    let preamble_end = starts.first().copied().unwrap_or(content.len());
    let sections = starts
      .iter()
      .enumerate()
      .map(|(i, &start)| {
        let end = starts.get(i + 1).copied().unwrap_or(content.len());
        &content[start..end]
      })
      .collect();

    Self {
      preamble: &content[..preamble_end],
      sections,
    }
  }

  /// Everything before the first heading
  pub fn preamble(&self) -> &'a str {
    self.preamble
  }

  /// The newest (normally unreleased) section
  pub fn first_section(&self) -> Option<&'a str> {
    self.sections.first().copied()
  }

  /// Every section after the first, concatenated verbatim
  pub fn later_sections(&self) -> String {
    self.sections.iter().skip(1).copied().collect()
  }
}
