//! Check runner for executing verification checks

use super::trait_def::{Check, CheckResult};
use crate::ci;
use crate::core::error::{ReleaseError, ReleaseResult};

/// Check runner that executes multiple checks
#[derive(Default)]
pub struct CheckRunner {
  checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
  pub fn new() -> Self {
    Self { checks: Vec::new() }
  }

  /// Add a check to the runner
  pub fn add_check(&mut self, check: impl Check + 'static) {
    self.checks.push(Box::new(check));
  }

  /// Run every check; a check that fails or errors never stops the others
  pub fn run_all(&self) -> Vec<CheckResult> {
    self
      .checks
      .iter()
      .map(|check| {
        tracing::debug!(check = check.name(), description = check.description(), "running check");
        match check.run() {
          Ok(result) => result,
          Err(err) => CheckResult::error(
            check.name(),
            format!("Check failed to run: {}", err),
            Some("Check the logs for more details"),
          ),
        }
      })
      .collect()
  }

  /// Run every check and report the outcome
  pub fn run_and_report(&self) -> ReleaseResult<Vec<CheckResult>> {
    let results = self.run_all();
    report(&results)?;
    Ok(results)
  }
}

/// Print each result, annotate failures, and fail when any result is blocking
pub fn report(results: &[CheckResult]) -> ReleaseResult<()> {
  for result in results {
    if result.passed {
      println!("✅ {}: {}", result.check_name, result.message);
      continue;
    }

    ci::log::error(&result.message);
    if let Some(details) = &result.details {
      println!("{}", details);
    }
    if let Some(suggestion) = &result.suggestion {
      println!("💡 {}", suggestion);
    }
  }

  let failed: Vec<String> = results
    .iter()
    .filter(|r| r.is_blocking())
    .map(|r| r.check_name.clone())
    .collect();

  if failed.is_empty() {
    Ok(())
  } else {
    Err(ReleaseError::Verification { failed })
  }
}
