//! Integration tests for `action-release backport plan`

use crate::helpers::{TestWorkspace, run_action_release_with_env, stderr, stdout};
use anyhow::Result;

fn workspace_with_oldest(oldest: u64) -> Result<TestWorkspace> {
  let ws = TestWorkspace::new()?;
  ws.write_file(
    ".github/releases.ini",
    &format!("[Defaults]\nOLDEST_SUPPORTED_MAJOR_VERSION={}\n", oldest),
  )?;
  Ok(ws)
}

#[test]
fn test_plan_writes_outputs() -> Result<()> {
  let ws = workspace_with_oldest(2)?;
  let output_file = ws.output_file();

  let output = run_action_release_with_env(
    &ws.path,
    &["backport", "plan", "--major-version", "v4", "--latest-tag", "3.28.1"],
    &[("GITHUB_OUTPUT", output_file.to_str().unwrap())],
  )?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let stdout = stdout(&output);
  assert!(stdout.contains("major_version: v4"));
  assert!(stdout.contains("latest_tag: 3.28.1"));

  assert_eq!(
    ws.outputs()?,
    vec![
      ("backport_source_branch".to_string(), "releases/v4".to_string()),
      (
        "backport_target_branches".to_string(),
        r#"["releases/v3","releases/v2"]"#.to_string()
      ),
    ]
  );
  Ok(())
}

#[test]
fn test_plan_without_backports_for_older_line() -> Result<()> {
  let ws = workspace_with_oldest(1)?;
  let output_file = ws.output_file();

  let output = run_action_release_with_env(
    &ws.path,
    &["backport", "plan", "--major-version", "v2", "--latest-tag", "v3.0.0"],
    &[("GITHUB_OUTPUT", output_file.to_str().unwrap())],
  )?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let outputs = ws.outputs()?;
  assert!(outputs.contains(&("backport_target_branches".to_string(), "[]".to_string())));
  Ok(())
}

#[test]
fn test_plan_without_github_output_succeeds() -> Result<()> {
  let ws = workspace_with_oldest(1)?;

  let output = run_action_release_with_env(
    &ws.path,
    &["backport", "plan", "--major-version", "v3", "--latest-tag", "3.1.0"],
    &[],
  )?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert!(!ws.output_file().exists());
  Ok(())
}

#[test]
fn test_plan_requires_major_version() -> Result<()> {
  let ws = workspace_with_oldest(1)?;

  let missing = run_action_release_with_env(&ws.path, &["backport", "plan", "--latest-tag", "3.1.0"], &[])?;
  assert!(!missing.status.success());

  let empty = run_action_release_with_env(
    &ws.path,
    &["backport", "plan", "--major-version", "", "--latest-tag", "3.1.0"],
    &[],
  )?;
  assert!(!empty.status.success());
  Ok(())
}

#[test]
fn test_plan_without_releases_ini_fails() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_action_release_with_env(
    &ws.path,
    &["backport", "plan", "--major-version", "v3", "--latest-tag", "3.1.0"],
    &[],
  )?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("releases.ini"));
  Ok(())
}
