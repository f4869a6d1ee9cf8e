//! Step outputs for the calling workflow (`$GITHUB_OUTPUT`)

use crate::core::error::{ReleaseResult, ResultExt};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const MULTILINE_DELIMITER: &str = "ACTION_RELEASE_EOF";

/// Appends `key=value` lines to the file named by `GITHUB_OUTPUT`
///
/// Without a path every write is a no-op, so commands behave the same when
/// run locally outside of Actions.
#[derive(Debug, Clone, Default)]
pub struct OutputSink {
  path: Option<PathBuf>,
}

impl OutputSink {
  pub fn new(path: Option<PathBuf>) -> Self {
    Self { path }
  }

  pub fn path(&self) -> Option<&Path> {
    self.path.as_deref()
  }

  /// Append a single output
  pub fn set(&self, key: &str, value: &str) -> ReleaseResult<()> {
    let Some(path) = &self.path else {
      tracing::debug!(key, "GITHUB_OUTPUT not set, skipping output");
      return Ok(());
    };

    let mut file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .with_context(|| format!("Failed to open step output file {}", path.display()))?;

    file
      .write_all(format_output(key, value).as_bytes())
      .with_context(|| format!("Failed to write step output '{}'", key))?;

    tracing::debug!(key, value, "wrote step output");
    Ok(())
  }
}

fn format_output(key: &str, value: &str) -> String {
  if value.contains('\n') {
    format!("{key}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}\n")
  } else {
    format!("{key}={value}\n")
  }
}
