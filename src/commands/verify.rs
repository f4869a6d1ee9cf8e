//! Verification commands
//!
//! Every command prints its diagnostics first, then runs all of its checks and
//! fails the step if any of them failed.

use crate::checks::{
  ArtifactScanFinished, CheckRunner, ConfigMatches, ExpectedQueriesRan, RuleSet, UnexpectedQueriesAbsent,
  load_actual, parse_expected, parse_query_list, render_yaml,
};
use crate::ci;
use crate::core::error::ReleaseResult;
use crate::sarif::SarifDocument;
use std::path::Path;
use std::rc::Rc;

/// Check which queries a SARIF file reports as run
pub fn run_verify_sarif(sarif_path: &Path, queries_run: &str, queries_not_run: &str) -> ReleaseResult<()> {
  let document = SarifDocument::load(sarif_path)?;
  let rules: RuleSet = Rc::new(document.executed_rules());

  ci::log::group("Rules", || {
    for (id, name) in rules.iter() {
      println!("{}: {}", id, name.as_deref().unwrap_or(""));
    }
  });

  let pretty = document.pretty()?;
  ci::log::group("Full SARIF", || println!("{}", pretty));

  let mut runner = CheckRunner::new();
  runner.add_check(ExpectedQueriesRan::new(parse_query_list(queries_run), Rc::clone(&rules)));
  runner.add_check(UnexpectedQueriesAbsent::new(parse_query_list(queries_not_run), rules));
  runner.run_and_report()?;

  Ok(())
}

/// Compare the code scanning configuration the action wrote with the expected one
pub fn run_verify_config(actual_path: &Path, expected: &str) -> ReleaseResult<()> {
  let actual = load_actual(actual_path)?;
  let expected = parse_expected(expected)?;

  ci::log::group("Expected configuration", || print!("{}", render_yaml(expected.as_ref())));
  ci::log::group("Actual configuration", || print!("{}", render_yaml(actual.as_ref())));

  let mut runner = CheckRunner::new();
  runner.add_check(ConfigMatches::new(actual, expected));
  runner.run_and_report()?;

  Ok(())
}

/// Fail unless the debug artifact scanner reported completion
pub fn run_verify_artifact_scan(finished: Option<String>) -> ReleaseResult<()> {
  let mut runner = CheckRunner::new();
  runner.add_check(ArtifactScanFinished::new(finished));
  runner.run_and_report()?;

  Ok(())
}
