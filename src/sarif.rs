//! The subset of SARIF consumed by query verification
//!
//! Only `runs[0].tool.extensions[*].rules[*]` is read: with CodeQL, every query
//! pack that ran contributes an extension listing the rules it evaluated.

use crate::core::error::{ReleaseResult, ResultExt};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SarifLog {
  #[serde(default)]
  pub runs: Vec<Run>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Run {
  #[serde(default)]
  pub tool: Tool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tool {
  #[serde(default)]
  pub extensions: Vec<ToolComponent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolComponent {
  #[serde(default)]
  pub rules: Vec<ReportingDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportingDescriptor {
  pub id: String,
  #[serde(default)]
  pub name: Option<String>,
}

/// A SARIF file as both the typed subset and the raw document
#[derive(Debug, Clone)]
pub struct SarifDocument {
  pub log: SarifLog,
  pub raw: serde_json::Value,
}

impl SarifDocument {
  pub fn load(path: &Path) -> ReleaseResult<Self> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read SARIF file {}", path.display()))?;
    Self::parse(&content).with_context(|| format!("Failed to parse SARIF file {}", path.display()))
  }

  pub fn parse(content: &str) -> ReleaseResult<Self> {
    let raw: serde_json::Value = serde_json::from_str(content)?;
    let log: SarifLog = serde_json::from_value(raw.clone())?;
    Ok(Self { log, raw })
  }

  /// Rule ID → display name for every rule of the first run
  pub fn executed_rules(&self) -> BTreeMap<String, Option<String>> {
    self
      .log
      .runs
      .first()
      .map(|run| {
        run
          .tool
          .extensions
          .iter()
          .flat_map(|ext| ext.rules.iter())
          .map(|rule| (rule.id.clone(), rule.name.clone()))
          .collect()
      })
      .unwrap_or_default()
  }

  pub fn pretty(&self) -> ReleaseResult<String> {
    Ok(serde_json::to_string_pretty(&self.raw)?)
  }
}
