//! Integration tests for `action-release verify` commands

use crate::helpers::{TestWorkspace, run_action_release, run_action_release_with_env, stderr, stdout};
use anyhow::Result;

const SARIF: &str = r#"{
  "version": "2.1.0",
  "runs": [
    {
      "tool": {
        "driver": { "name": "CodeQL" },
        "extensions": [
          {
            "name": "codeql/javascript-queries",
            "rules": [
              { "id": "js/sql-injection", "name": "js/sql-injection" },
              { "id": "js/xss", "name": "js/xss" }
            ]
          }
        ]
      },
      "results": []
    }
  ]
}"#;

#[test]
fn test_sarif_expected_queries_pass() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("results/javascript.sarif", SARIF)?;

  let output = run_action_release(
    &ws.path,
    &[
      "verify",
      "sarif",
      "results/javascript.sarif",
      "--queries-run",
      "js/sql-injection, js/xss",
      "--queries-not-run",
      "js/unused-local-variable",
    ],
  )?;

  let stdout = stdout(&output);
  assert!(stdout.contains("::group::Rules\njs/sql-injection: js/sql-injection\njs/xss: js/xss\n::endgroup::"));
  assert!(stdout.contains("::group::Full SARIF"));
  assert!(!stdout.contains("::error::"));
  Ok(())
}

#[test]
fn test_sarif_both_checks_report_failures() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("javascript.sarif", SARIF)?;

  let output = run_action_release_with_env(
    &ws.path,
    &[
      "verify",
      "sarif",
      "javascript.sarif",
      "--queries-run",
      "js/sql-injection,js/path-injection",
      "--queries-not-run",
      "js/xss",
    ],
    &[],
  )?;

  assert_eq!(output.status.code(), Some(3));
  let stdout = stdout(&output);
  assert!(stdout.contains(
    "::error::Expected SARIF output to contain queries js/path-injection, but found only js/sql-injection, js/xss"
  ));
  assert!(stdout.contains("::error::Expected SARIF output not to contain queries js/xss, but found them"));

  // Diagnostics come before the annotations
  let group = stdout.find("::group::Full SARIF").unwrap();
  let error = stdout.find("::error::").unwrap();
  assert!(group < error);
  Ok(())
}

#[test]
fn test_sarif_invalid_json_fails() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("broken.sarif", "{ not json")?;

  let output = run_action_release_with_env(&ws.path, &["verify", "sarif", "broken.sarif"], &[])?;
  assert!(!output.status.success());
  assert!(stderr(&output).contains("broken.sarif"));
  Ok(())
}

#[test]
fn test_config_matches_with_reordered_queries() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file(
    "config.yml",
    "queries:\n  - uses: security-extended\n  - uses: ./custom\npaths-ignore:\n  - test\n",
  )?;

  let output = run_action_release(
    &ws.path,
    &[
      "verify",
      "config",
      "--expected",
      r#"{"paths-ignore": ["test"], "queries": [{"uses": "./custom"}, {"uses": "security-extended"}]}"#,
      "config.yml",
    ],
  )?;
  assert!(stdout(&output).contains("::group::Actual configuration"));
  Ok(())
}

#[test]
fn test_config_mismatch_prints_diff() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("config.yml", "queries:\n  - uses: security-extended\n")?;

  let output = run_action_release_with_env(
    &ws.path,
    &[
      "verify",
      "config",
      "--expected",
      r#"{"queries": [{"uses": "security-and-quality"}]}"#,
      "config.yml",
    ],
    &[],
  )?;

  assert_eq!(output.status.code(), Some(3));
  let stdout = stdout(&output);
  assert!(stdout.contains("::error::Code scanning configuration mismatch"));
  assert!(stdout.contains("-- uses: security-and-quality"));
  assert!(stdout.contains("+- uses: security-extended"));
  Ok(())
}

#[test]
fn test_config_absent_on_both_sides() -> Result<()> {
  let ws = TestWorkspace::new()?;

  run_action_release(&ws.path, &["verify", "config", "--expected", "", "missing.yml"])?;
  Ok(())
}

#[test]
fn test_config_absent_but_expected() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_action_release_with_env(
    &ws.path,
    &["verify", "config", "--expected", r#"{"queries": []}"#, "missing.yml"],
    &[],
  )?;
  assert_eq!(output.status.code(), Some(3));
  Ok(())
}

#[test]
fn test_artifact_scan_guard() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let finished = run_action_release_with_env(
    &ws.path,
    &["verify", "artifact-scan"],
    &[("CODEQL_ACTION_ARTIFACT_SCAN_FINISHED", "true")],
  )?;
  assert!(finished.status.success());

  let unset = run_action_release_with_env(&ws.path, &["verify", "artifact-scan"], &[])?;
  assert_eq!(unset.status.code(), Some(3));
  assert!(stdout(&unset).contains("::error::Expected CODEQL_ACTION_ARTIFACT_SCAN_FINISHED to be 'true'"));

  let other = run_action_release_with_env(
    &ws.path,
    &["verify", "artifact-scan"],
    &[("CODEQL_ACTION_ARTIFACT_SCAN_FINISHED", "false")],
  )?;
  assert!(!other.status.success());
  Ok(())
}
