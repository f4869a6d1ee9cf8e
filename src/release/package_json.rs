//! Version rewrites in `package.json`
//!
//! `npm version` fails on branches with merge conflicts, so the version is
//! replaced textually on the line following `"name": "codeql",`.

use crate::core::error::{InputError, ReleaseError, ReleaseResult, ResultExt};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default location of the manifest, relative to the repository root
pub const DEFAULT_PACKAGE_JSON: &str = "package.json";

#[derive(Debug, Deserialize)]
struct PackageManifest {
  version: String,
}

/// Read the `version` field of a `package.json`
pub fn read_version(path: &Path) -> ReleaseResult<String> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let manifest: PackageManifest =
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
  Ok(manifest.version)
}

/// Version number a backport to `target_major` should carry: `{target}.{minor}.{patch}`
pub fn backport_version(current_version: &str, target_major: &str) -> ReleaseResult<String> {
  let mut parts = current_version.split('.');
  match (parts.next(), parts.next(), parts.next()) {
    (Some(_), Some(minor), Some(patch)) => Ok(format!("{}.{}.{}", target_major, minor, patch)),
    _ => Err(ReleaseError::Input(InputError::InvalidValue {
      field: "package version".to_string(),
      value: current_version.to_string(),
      expected: "major.minor.patch".to_string(),
    })),
  }
}

/// Replace `"version": "{prev}"` directly after the `codeql` package name
pub fn set_codeql_version(content: &str, prev: &str, next: &str) -> String {
  let needle = format!("\"version\": \"{}\"", prev);
  let mut prev_line_is_codeql = false;

  let lines: Vec<String> = content
    .split('\n')
    .map(|line| {
      let rewritten = if prev_line_is_codeql && line.contains(&needle) {
        line.replacen(prev, next, 1)
      } else {
        line.to_string()
      };
      prev_line_is_codeql = rewritten.contains("\"name\": \"codeql\",");
      rewritten
    })
    .collect();

  lines.join("\n")
}

/// Contents of the `package.json` at `path` with its version renumbered; nothing is written
pub fn renumbered(path: &Path, prev: &str, next: &str) -> ReleaseResult<String> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  Ok(set_codeql_version(&content, prev, next))
}
