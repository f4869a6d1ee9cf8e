//! Default CodeQL bundle bump from a `release` workflow event
//!
//! Bundles are not tagged by the CLI version they contain. Instead every new
//! bundle release carries a `cli-version-<version>.txt` marker asset.

use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default location of the defaults file, relative to the repository root
pub const DEFAULT_DEFAULTS_PATH: &str = "src/defaults.json";

/// Contents of `defaults.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
  pub bundle_version: String,
  pub cli_version: String,
  pub prior_bundle_version: String,
  pub prior_cli_version: String,
}

/// The subset of a GitHub `release` payload that is consumed here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleRelease {
  pub tag_name: String,
  #[serde(default)]
  pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseAsset {
  pub name: String,
}

#[derive(Debug, Deserialize)]
struct ReleaseEvent {
  release: Option<BundleRelease>,
}

impl BundleRelease {
  /// CLI version recorded by the release's marker asset
  pub fn cli_version(&self) -> ReleaseResult<String> {
    let marker = Regex::new(r"cli-version-(.*)\.txt")?;

    let mut versions = self
      .assets
      .iter()
      .filter_map(|asset| marker.captures(&asset.name))
      .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
      .filter(|v| !v.is_empty());

    match (versions.next(), versions.next()) {
      (Some(version), None) => Ok(version),
      (Some(_), Some(_)) => Err(ReleaseError::input(format!(
        "Release {} has multiple CLI version marker files.",
        self.tag_name
      ))),
      (None, _) => Err(ReleaseError::input(format!(
        "Failed to find the CodeQL CLI version for release {}.",
        self.tag_name
      ))),
    }
  }
}

/// Shift the current defaults into the `prior*` slots and adopt the new release
pub fn next_defaults(current: &Defaults, release: &BundleRelease) -> ReleaseResult<Defaults> {
  Ok(Defaults {
    bundle_version: release.tag_name.clone(),
    cli_version: release.cli_version()?,
    prior_bundle_version: current.bundle_version.clone(),
    prior_cli_version: current.cli_version.clone(),
  })
}

/// Read the `release` object from a workflow event payload file
pub fn load_release_event(event_path: &Path) -> ReleaseResult<BundleRelease> {
  let content =
    fs::read_to_string(event_path).with_context(|| format!("Failed to read event payload {}", event_path.display()))?;
  let event: ReleaseEvent = serde_json::from_str(&content).context("Failed to parse event payload")?;

  event
    .release
    .ok_or_else(|| {
      ReleaseError::with_help(
        format!("Event payload {} does not contain a release", event_path.display()),
        "Run this step from a workflow triggered by a `release` event.",
      )
    })
}

/// Rewrite `defaults.json` for the given release
pub fn update_defaults(defaults_path: &Path, release: &BundleRelease) -> ReleaseResult<Defaults> {
  let content =
    fs::read_to_string(defaults_path).with_context(|| format!("Failed to read {}", defaults_path.display()))?;
  let current: Defaults =
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", defaults_path.display()))?;

  let updated = next_defaults(&current, release)?;

  let mut rendered = serde_json::to_string_pretty(&updated)?;
  rendered.push('\n');
  fs::write(defaults_path, rendered).with_context(|| format!("Failed to write {}", defaults_path.display()))?;

  Ok(updated)
}
