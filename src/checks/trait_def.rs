//! Check trait abstraction for CI verifications
//!
//! Each verification step is a set of independent checks. A check owns the
//! inputs it verifies and reports a [`CheckResult`]; the runner decides how
//! failures surface in the workflow.

use crate::core::error::ReleaseResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
  /// Informational message (not an issue)
  Info,
  /// Error (fails the step)
  Error,
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Severity::Info => write!(f, "INFO"),
      Severity::Error => write!(f, "ERROR"),
    }
  }
}

/// Result of running a check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
  /// Name of the check that ran
  pub check_name: String,
  /// Whether the check passed
  pub passed: bool,
  /// Severity level (if failed)
  pub severity: Severity,
  /// Human-readable message
  pub message: String,
  /// Optional suggested fix
  pub suggestion: Option<String>,
  /// Additional detail printed after the message (e.g. a diff)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<String>,
}

impl CheckResult {
  /// Create a passing check result
  pub fn pass(check_name: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      check_name: check_name.into(),
      passed: true,
      severity: Severity::Info,
      message: message.into(),
      suggestion: None,
      details: None,
    }
  }

  /// Create a failing check result with error severity
  pub fn error(check_name: impl Into<String>, message: impl Into<String>, suggestion: Option<impl Into<String>>) -> Self {
    Self {
      check_name: check_name.into(),
      passed: false,
      severity: Severity::Error,
      message: message.into(),
      suggestion: suggestion.map(|s| s.into()),
      details: None,
    }
  }

  /// Add details to the check result
  pub fn with_details(mut self, details: impl Into<String>) -> Self {
    self.details = Some(details.into());
    self
  }

  /// Whether this result should fail the step
  pub fn is_blocking(&self) -> bool {
    !self.passed && self.severity == Severity::Error
  }
}

/// Verification check
///
/// ```rust,ignore
/// struct EnvIsTrue(Option<String>);
///
/// impl Check for EnvIsTrue {
///   fn name(&self) -> &str {
///     "env-is-true"
///   }
///
///   fn description(&self) -> &str {
///     "Validates that a flag is set"
///   }
///
///   fn run(&self) -> ReleaseResult<CheckResult> {
///     if self.0.as_deref() == Some("true") {
///       Ok(CheckResult::pass(self.name(), "Flag is set"))
///     } else {
///       Ok(CheckResult::error(self.name(), "Flag is not set", None::<String>))
///     }
///   }
/// }
/// ```
pub trait Check {
  /// Unique name for this check (kebab-case)
  fn name(&self) -> &str;

  /// Human-readable description of what this check validates
  fn description(&self) -> &str;

  /// Run the check and return a result
  fn run(&self) -> ReleaseResult<CheckResult>;
}
