//! Backport planning: which release branches receive the current release
//!
//! A release cut from `releases/vN` is backported to every older, still
//! supported `releases/vM` branch, but only when `releases/vN` is at or ahead
//! of the most recently published tag.

use crate::core::error::{InputError, ReleaseError, ReleaseResult};

/// Branches involved in backporting one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackportPlan {
  pub source_branch: String,
  /// Strictly descending by major version
  pub target_branches: Vec<String>,
}

impl BackportPlan {
  /// Compute the plan for `major_version` (`vN`) given the latest published tag
  pub fn compute(major_version: &str, latest_tag: &str, oldest_supported_major: u64) -> ReleaseResult<Self> {
    let major = parse_major_version(major_version)?;
    validate_tag(latest_tag)?;

    let source_branch = format!("releases/{}", major_version);

    let target_branches = if considers_backports(major_version, latest_tag) {
      (1..major)
        .rev()
        .filter(|i| *i >= oldest_supported_major)
        .map(|i| format!("releases/v{}", i))
        .collect()
    } else {
      Vec::new()
    };

    Ok(Self {
      source_branch,
      target_branches,
    })
  }

  /// Target branches rendered as a JSON array for the step output
  pub fn target_branches_json(&self) -> ReleaseResult<String> {
    Ok(serde_json::to_string(&self.target_branches)?)
  }
}

/// Whether this release is cut from the newest release line
///
/// Compares `major_version` against the tag's first `.`-separated component as
/// plain strings: `"v2" >= "v2"` and `"v3" >= "v2"` hold while `"v1" >= "v2"`
/// does not. The comparison is lexicographic, so `"v10" >= "v9"` is false.
pub fn considers_backports(major_version: &str, latest_tag: &str) -> bool {
  let tag_major = latest_tag.split('.').next().unwrap_or(latest_tag);
  major_version >= tag_major
}

fn parse_major_version(major_version: &str) -> ReleaseResult<u64> {
  major_version
    .strip_prefix('v')
    .and_then(|n| n.parse::<u64>().ok())
    .ok_or_else(|| {
      ReleaseError::Input(InputError::InvalidValue {
        field: "major version".to_string(),
        value: major_version.to_string(),
        expected: "the form vN, e.g. v3".to_string(),
      })
    })
}

fn validate_tag(latest_tag: &str) -> ReleaseResult<()> {
  let has_numeric_component = latest_tag
    .trim_start_matches('v')
    .split('.')
    .any(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));

  if has_numeric_component {
    Ok(())
  } else {
    Err(ReleaseError::Input(InputError::InvalidValue {
      field: "latest tag".to_string(),
      value: latest_tag.to_string(),
      expected: "a dotted version such as 2.5.0".to_string(),
    }))
  }
}
