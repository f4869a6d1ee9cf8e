//! Release notes for backport branches
//!
//! When a release is backported from `releases/vS` to `releases/vT`, the
//! changelog headings are renumbered from `S.x.y` to `T.x.y` and entries
//! tagged `[vN+ only]` are dropped from branches older than `vN`.

use super::is_heading;
use crate::core::error::{ReleaseError, ReleaseResult};
use regex::Regex;

const NO_USER_FACING_CHANGES: &str = "No user facing changes.\n";

/// Rewrite `content` for the `target_major` release line
///
/// `source_major` and `target_major` are bare major numbers (`"3"`, `"2"`).
/// Blank lines inside sections are dropped and sections left without entries
/// receive a placeholder line.
pub fn migrate_changelog_for_backport(content: &str, source_major: &str, target_major: &str) -> ReleaseResult<String> {
  let newer_versions_only = Regex::new(r"\[v(\d+)\+ only\]")?;
  let target = target_major.parse::<u64>().ok();
  let source_heading = format!("## {}", source_major);
  let target_heading = format!("## {}", target_major);
  let renumber = |line: &str| line.replacen(&source_heading, &target_heading, 1);

  let mut lines = content.split('\n');
  let mut output = String::with_capacity(content.len());

  // Up to the first section, duplicate lines as they are.
  let mut found_first_section = false;
  for line in lines.by_ref() {
    if is_heading(line) {
      output.push_str(&renumber(line));
      output.push('\n');
      found_first_section = true;
      break;
    }
    output.push_str(line);
    output.push('\n');
  }

  if !found_first_section {
    return Err(ReleaseError::input("Could not find any change sections in CHANGELOG.md"));
  }

  output.push('\n');
  let mut found_content = false;

  for line in lines {
    if let Some(caps) = newer_versions_only.captures(line)
      && let (Some(target), Ok(only_from)) = (target, caps[1].parse::<u64>())
      && target < only_from
    {
      continue;
    }

    if is_heading(line) {
      if !found_content {
        output.push_str(NO_USER_FACING_CHANGES);
      }
      found_content = false;
      output.push('\n');
      output.push_str(&renumber(line));
      output.push_str("\n\n");
    } else if !line.trim().is_empty() {
      found_content = true;
      output.push_str(line);
      output.push('\n');
    }
  }

  Ok(output)
}

/// Major version of a `releases/vN` branch name
pub fn branch_major_version(branch: &str) -> ReleaseResult<&str> {
  branch
    .strip_prefix("releases/v")
    .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    .ok_or_else(|| ReleaseError::input(format!("Branch '{}' is not of the form releases/vN", branch)))
}
