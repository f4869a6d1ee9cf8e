//! File updaters run by scheduled and release-triggered workflows

use crate::core::config::{SupportWindow, require_env_path};
use crate::core::error::ReleaseResult;
use crate::release::{bundle, enterprise};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Recompute the supported GitHub Enterprise Server range
pub fn run_update_enterprise_versions(
  api_compatibility_path: &Path,
  releases_dir: Option<PathBuf>,
  window: &SupportWindow,
) -> ReleaseResult<()> {
  let releases_dir = require_env_path("ENTERPRISE_RELEASES_PATH", releases_dir)?;
  tracing::debug!(releases_dir = %releases_dir.display(), ?window, "updating enterprise versions");

  let range = enterprise::update_api_compatibility(api_compatibility_path, &releases_dir, window, Utc::now())?;

  println!(
    "✅ Supported GHES range: {} to {} ({})",
    range.minimum_version,
    range.maximum_version,
    api_compatibility_path.display()
  );
  Ok(())
}

/// Point the defaults at the bundle release that triggered the workflow
pub fn run_update_bundle(defaults_path: &Path, event_path: Option<PathBuf>) -> ReleaseResult<()> {
  let event_path = require_env_path("GITHUB_EVENT_PATH", event_path)?;
  let release = bundle::load_release_event(&event_path)?;

  let defaults = bundle::update_defaults(defaults_path, &release)?;

  println!(
    "✅ Updated {}: bundle {} (CLI {}), previously {} (CLI {})",
    defaults_path.display(),
    defaults.bundle_version,
    defaults.cli_version,
    defaults.prior_bundle_version,
    defaults.prior_cli_version
  );
  Ok(())
}
