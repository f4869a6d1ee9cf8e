//! Post-step guard: the debug artifact scan must have completed

use super::trait_def::{Check, CheckResult};
use crate::core::error::ReleaseResult;

pub const ARTIFACT_SCAN_FINISHED_ENV: &str = "CODEQL_ACTION_ARTIFACT_SCAN_FINISHED";

/// `CODEQL_ACTION_ARTIFACT_SCAN_FINISHED` is exactly `"true"`
pub struct ArtifactScanFinished {
  value: Option<String>,
}

impl ArtifactScanFinished {
  pub fn new(value: Option<String>) -> Self {
    Self { value }
  }
}

impl Check for ArtifactScanFinished {
  fn name(&self) -> &str {
    "artifact-scan-finished"
  }

  fn description(&self) -> &str {
    "Debug artifacts were scanned before upload"
  }

  fn run(&self) -> ReleaseResult<CheckResult> {
    match self.value.as_deref() {
      Some("true") => Ok(CheckResult::pass(self.name(), "Artifact scan finished")),
      other => Ok(CheckResult::error(
        self.name(),
        format!(
          "Expected {} to be 'true', but it was {}",
          ARTIFACT_SCAN_FINISHED_ENV,
          other.map(|v| format!("'{}'", v)).unwrap_or_else(|| "unset".to_string())
        ),
        Some("The artifact scanner did not run or did not complete"),
      )),
    }
  }
}
