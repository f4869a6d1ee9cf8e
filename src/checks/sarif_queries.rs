//! Which queries a SARIF file says were run

use super::trait_def::{Check, CheckResult};
use crate::core::error::ReleaseResult;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Rule ID → display name, shared by both query checks
pub type RuleSet = Rc<BTreeMap<String, Option<String>>>;

/// Split a comma-separated list, trimming entries and dropping empty ones
pub fn parse_query_list(list: &str) -> Vec<String> {
  list
    .split(',')
    .map(str::trim)
    .filter(|id| !id.is_empty())
    .map(String::from)
    .collect()
}

/// Every query in `expected` must appear among the executed rules
pub struct ExpectedQueriesRan {
  expected: Vec<String>,
  rules: RuleSet,
}

impl ExpectedQueriesRan {
  pub fn new(expected: Vec<String>, rules: RuleSet) -> Self {
    Self { expected, rules }
  }
}

impl Check for ExpectedQueriesRan {
  fn name(&self) -> &str {
    "expected-queries-ran"
  }

  fn description(&self) -> &str {
    "Queries listed in queries-run appear in the SARIF output"
  }

  fn run(&self) -> ReleaseResult<CheckResult> {
    let missing: Vec<&str> = self
      .expected
      .iter()
      .filter(|id| !self.rules.contains_key(id.as_str()))
      .map(String::as_str)
      .collect();

    if missing.is_empty() {
      return Ok(CheckResult::pass(
        self.name(),
        format!("All {} expected queries were run", self.expected.len()),
      ));
    }

    let found: Vec<&str> = self.rules.keys().map(String::as_str).collect();
    Ok(CheckResult::error(
      self.name(),
      format!(
        "Expected SARIF output to contain queries {}, but found only {}",
        missing.join(", "),
        found.join(", ")
      ),
      None::<String>,
    ))
  }
}

/// No query in `unexpected` may appear among the executed rules
pub struct UnexpectedQueriesAbsent {
  unexpected: Vec<String>,
  rules: RuleSet,
}

impl UnexpectedQueriesAbsent {
  pub fn new(unexpected: Vec<String>, rules: RuleSet) -> Self {
    Self { unexpected, rules }
  }
}

impl Check for UnexpectedQueriesAbsent {
  fn name(&self) -> &str {
    "unexpected-queries-absent"
  }

  fn description(&self) -> &str {
    "Queries listed in queries-not-run are absent from the SARIF output"
  }

  fn run(&self) -> ReleaseResult<CheckResult> {
    let present: Vec<&str> = self
      .unexpected
      .iter()
      .filter(|id| self.rules.contains_key(id.as_str()))
      .map(String::as_str)
      .collect();

    if present.is_empty() {
      return Ok(CheckResult::pass(
        self.name(),
        format!("None of the {} excluded queries were run", self.unexpected.len()),
      ));
    }

    Ok(CheckResult::error(
      self.name(),
      format!(
        "Expected SARIF output not to contain queries {}, but found them",
        present.join(", ")
      ),
      None::<String>,
    ))
  }
}
