//! Code scanning configuration comparison
//!
//! The actual configuration is the YAML file the action wrote; the expected one
//! is passed inline as JSON. Either may be absent. `queries` lists are compared
//! as sets because their order depends on query resolution.

use super::trait_def::{Check, CheckResult};
use crate::core::error::{ReleaseResult, ResultExt};
use serde_json::Value;
use similar::TextDiff;
use std::fs;
use std::io;
use std::path::Path;

const QUERIES_KEY: &str = "queries";

/// Load the actual configuration; a missing or empty file is absent
pub fn load_actual(path: &Path) -> ReleaseResult<Option<Value>> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
    Err(err) => return Err(err).with_context(|| format!("Failed to read {}", path.display())),
  };

  let value: Value =
    serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
  Ok(match value {
    Value::Null => None,
    value => Some(value),
  })
}

/// Parse the expected configuration; an empty or blank argument is absent
pub fn parse_expected(raw: &str) -> ReleaseResult<Option<Value>> {
  if raw.trim().is_empty() {
    return Ok(None);
  }
  let value: Value = serde_json::from_str(raw).context("Failed to parse expected configuration")?;
  Ok(Some(value))
}

/// Sort a top-level `queries` sequence so it compares order-insensitively
pub fn normalize(config: Option<Value>) -> Option<Value> {
  let mut config = config?;
  if let Some(Value::Array(queries)) = config.as_object_mut().and_then(|obj| obj.get_mut(QUERIES_KEY)) {
    queries.sort_by_cached_key(sort_key);
  }
  Some(config)
}

fn sort_key(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

/// YAML rendering used for logs and diffs
pub fn render_yaml(config: Option<&Value>) -> String {
  match config {
    None => "(absent)\n".to_string(),
    Some(value) => serde_yaml::to_string(value).unwrap_or_else(|_| format!("{}\n", value)),
  }
}

/// Actual and expected configurations are structurally equal after normalization
pub struct ConfigMatches {
  actual: Option<Value>,
  expected: Option<Value>,
}

impl ConfigMatches {
  pub fn new(actual: Option<Value>, expected: Option<Value>) -> Self {
    Self {
      actual: normalize(actual),
      expected: normalize(expected),
    }
  }
}

impl Check for ConfigMatches {
  fn name(&self) -> &str {
    "config-matches"
  }

  fn description(&self) -> &str {
    "Code scanning configuration matches the expected configuration"
  }

  fn run(&self) -> ReleaseResult<CheckResult> {
    if self.actual == self.expected {
      return Ok(CheckResult::pass(self.name(), "Code scanning configuration matches"));
    }

    let expected = render_yaml(self.expected.as_ref());
    let actual = render_yaml(self.actual.as_ref());
    let diff = TextDiff::from_lines(&expected, &actual)
      .unified_diff()
      .header("expected", "actual")
      .to_string();

    Ok(CheckResult::error(self.name(), "Code scanning configuration mismatch", None::<String>).with_details(diff))
  }
}
