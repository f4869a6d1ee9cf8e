//! Workflow commands: collapsible log groups and annotations
//!
//! See <https://docs.github.com/actions/reference/workflow-commands-for-github-actions>.

/// Run `f` with its stdout wrapped in a collapsible `::group::`
pub fn group<T>(title: &str, f: impl FnOnce() -> T) -> T {
  println!("::group::{}", escape_data(title));
  let result = f();
  println!("::endgroup::");
  result
}

/// Emit an error annotation, marking the step as failed in the UI
pub fn error(message: &str) {
  println!("::error::{}", escape_data(message));
}

/// Emit a warning annotation
pub fn warning(message: &str) {
  println!("::warning::{}", escape_data(message));
}

fn escape_data(value: &str) -> String {
  value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
