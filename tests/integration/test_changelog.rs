//! Integration tests for `action-release changelog` commands

use crate::helpers::{TestWorkspace, run_action_release, run_action_release_with_env, stderr, stdout};
use anyhow::Result;

const CHANGELOG: &str = "# CodeQL Action Changelog\n\nSee the [releases page](https://github.com/github/codeql-action/releases) for the relevant changes to the CodeQL CLI and language packs.\n\n## [UNRELEASED]\n\n- Add a new input. [#2701](https://github.com/github/codeql-action/pull/2701)\n\n## 3.28.1 - 10 Jan 2025\n\n- Fix a crash on startup. [#2690](https://github.com/github/codeql-action/pull/2690)\n\n## 3.28.0 - 02 Jan 2025\n\nNo user facing changes.\n";

#[test]
fn test_extract_first_section() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("CHANGELOG.md", CHANGELOG)?;

  let output = run_action_release(&ws.path, &["changelog", "extract", "CHANGELOG.md", "v3.28.2"])?;
  let notes = stdout(&output);

  assert!(notes.starts_with("# CodeQL Action Changelog\n\n"));
  assert!(notes.contains("- Add a new input."));
  assert!(!notes.contains("3.28.1"));
  assert!(notes.ends_with(
    "See the full [CHANGELOG.md](https://github.com/github/codeql-action/blob/v3.28.2/CHANGELOG.md) for more information."
  ));
  Ok(())
}

#[test]
fn test_extract_missing_changelog() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_action_release(&ws.path, &["changelog", "extract", "CHANGELOG.md", "v1.0.0"])?;
  assert_eq!(
    stdout(&output),
    "No changes.\n\nSee the full [CHANGELOG.md](https://github.com/github/codeql-action/blob/v1.0.0/CHANGELOG.md) for more information."
  );
  Ok(())
}

#[test]
fn test_rollback_replaces_unreleased_section() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("CHANGELOG.md", CHANGELOG)?;

  let output = run_action_release(
    &ws.path,
    &["changelog", "rollback", "-t", "3.28.0", "-r", "3.28.1", "-n", "3.28.2"],
  )?;
  let rewritten = stdout(&output);

  assert!(rewritten.starts_with(
    "# CodeQL Action Changelog\n\nSee the [releases page](https://github.com/github/codeql-action/releases) for the relevant changes to the CodeQL CLI and language packs.\n\n## 3.28.2 - "
  ));
  assert!(rewritten.contains(
    "\n\nThis release rolls back 3.28.1 due to issues with that release. It is identical to 3.28.0.\n\n## 3.28.1 - 10 Jan 2025\n"
  ));
  assert!(!rewritten.contains("[UNRELEASED]"));
  assert!(!rewritten.contains("Add a new input"));
  assert!(rewritten.ends_with("## 3.28.0 - 02 Jan 2025\n\nNo user facing changes.\n"));

  // The file on disk is untouched
  assert_eq!(ws.read_file("CHANGELOG.md")?, CHANGELOG);
  Ok(())
}

#[test]
fn test_rollback_missing_changelog() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_action_release(
    &ws.path,
    &[
      "changelog",
      "rollback",
      "--target-version",
      "1.0.0",
      "--rollback-version",
      "1.0.1",
      "--new-version",
      "1.0.2",
    ],
  )?;
  let rewritten = stdout(&output);

  assert!(rewritten.starts_with("# CodeQL Action Changelog\n\n## 1.0.2 - "));
  assert!(rewritten.ends_with("This release rolls back 1.0.1 due to issues with that release. It is identical to 1.0.0.\n\n"));
  Ok(())
}

#[test]
fn test_rollback_requires_all_versions() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_action_release_with_env(&ws.path, &["changelog", "rollback", "-t", "1.0.0", "-r", "1.0.1"], &[])?;
  assert!(!output.status.success());
  assert!(stderr(&output).contains("--new-version"));
  Ok(())
}

#[test]
fn test_finalize_stamps_unreleased() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file("CHANGELOG.md", CHANGELOG)?;

  run_action_release(&ws.path, &["changelog", "finalize", "--version", "3.28.2"])?;

  let finalized = ws.read_file("CHANGELOG.md")?;
  assert!(!finalized.contains("[UNRELEASED]"));
  assert!(finalized.contains("\n## 3.28.2 - "));
  assert!(finalized.contains("## 3.28.1 - 10 Jan 2025"));
  Ok(())
}

#[test]
fn test_finalize_without_marker_leaves_file() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let content = "# CodeQL Action Changelog\n\n## 3.28.1 - 10 Jan 2025\n\n- Fix\n";
  ws.write_file("CHANGELOG.md", content)?;

  let output = run_action_release(&ws.path, &["changelog", "finalize", "--version", "3.28.2"])?;
  assert!(stdout(&output).contains("::warning::"));
  assert_eq!(ws.read_file("CHANGELOG.md")?, content);
  Ok(())
}

#[test]
fn test_backport_renumbers_package_and_changelog() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file(
    "package.json",
    "{\n  \"name\": \"codeql\",\n  \"version\": \"3.28.1\",\n  \"private\": true\n}\n",
  )?;
  ws.write_file(
    "CHANGELOG.md",
    "# CodeQL Action Changelog\n\n## 3.28.1 - 10 Jan 2025\n\n- Fix A\n- [v3+ only] Node 20 runtime\n\n## 3.28.0 - 02 Jan 2025\n\n- [v3+ only] Only new\n\n## 3.27.9 - 20 Dec 2024\n\n- Fix B\n",
  )?;
  let output_file = ws.output_file();

  let output = run_action_release_with_env(
    &ws.path,
    &[
      "changelog",
      "backport",
      "--source-branch",
      "releases/v3",
      "--target-branch",
      "releases/v2",
    ],
    &[("GITHUB_OUTPUT", output_file.to_str().unwrap())],
  )?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  assert!(ws.read_file("package.json")?.contains("\"version\": \"2.28.1\""));

  let changelog = ws.read_file("CHANGELOG.md")?;
  assert!(changelog.contains("## 2.28.1 - 10 Jan 2025"));
  assert!(changelog.contains("- Fix A"));
  assert!(!changelog.contains("[v3+ only]"));
  assert!(changelog.contains("## 2.28.0 - 02 Jan 2025\n\nNo user facing changes.\n"));
  assert!(changelog.contains("## 2.27.9 - 20 Dec 2024"));

  assert_eq!(ws.outputs()?, vec![("version".to_string(), "2.28.1".to_string())]);
  Ok(())
}

#[test]
fn test_backport_without_sections_leaves_package_json() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let manifest = "{\n  \"name\": \"codeql\",\n  \"version\": \"3.28.1\",\n  \"private\": true\n}\n";
  ws.write_file("package.json", manifest)?;
  let changelog = "# CodeQL Action Changelog\n\nNothing released yet.\n";
  ws.write_file("CHANGELOG.md", changelog)?;

  let output = run_action_release_with_env(
    &ws.path,
    &[
      "changelog",
      "backport",
      "--source-branch",
      "releases/v3",
      "--target-branch",
      "releases/v2",
    ],
    &[],
  )?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Could not find any change sections"));

  assert_eq!(ws.read_file("package.json")?, manifest);
  assert_eq!(ws.read_file("CHANGELOG.md")?, changelog);
  Ok(())
}

#[test]
fn test_backport_without_changelog_leaves_package_json() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let manifest = "{\n  \"name\": \"codeql\",\n  \"version\": \"3.28.1\"\n}\n";
  ws.write_file("package.json", manifest)?;

  let output = run_action_release_with_env(
    &ws.path,
    &[
      "changelog",
      "backport",
      "--source-branch",
      "releases/v3",
      "--target-branch",
      "releases/v2",
    ],
    &[],
  )?;
  assert!(!output.status.success());
  assert_eq!(ws.read_file("package.json")?, manifest);
  Ok(())
}
