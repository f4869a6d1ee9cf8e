//! Backport plan command

use crate::ci::OutputSink;
use crate::core::config::ReleasesConfig;
use crate::core::error::ReleaseResult;
use crate::release::BackportPlan;
use std::path::Path;

/// Compute which release branches a new release is backported to
pub fn run_backport_plan(
  major_version: &str,
  latest_tag: &str,
  releases_ini: &Path,
  output: &OutputSink,
) -> ReleaseResult<()> {
  println!("major_version: {}", major_version);
  println!("latest_tag: {}", latest_tag);

  let config = ReleasesConfig::load(releases_ini)?;
  tracing::debug!(
    oldest_supported_major_version = config.oldest_supported_major_version,
    "loaded release configuration"
  );

  let plan = BackportPlan::compute(major_version, latest_tag, config.oldest_supported_major_version)?;
  let targets = plan.target_branches_json()?;

  println!("backport_source_branch: {}", plan.source_branch);
  println!("backport_target_branches: {}", targets);

  tracing::debug!(github_output = ?output.path(), "writing step outputs");
  output.set("backport_source_branch", &plan.source_branch)?;
  output.set("backport_target_branches", &targets)?;

  Ok(())
}
