//! GitHub Enterprise Server compatibility range
//!
//! Derives the `{minimumVersion, maximumVersion}` range written to
//! `api-compatibility.json` from the GHES release registry (`releases.json`).

use crate::core::config::SupportWindow;
use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// File name of the registry inside `ENTERPRISE_RELEASES_PATH`
pub const RELEASES_FILE: &str = "releases.json";

/// Default location of the compatibility file, relative to the repository root
pub const DEFAULT_API_COMPATIBILITY_PATH: &str = "src/api-compatibility.json";

/// One GHES release line, keyed by `"{major}.{minor}"` in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseRelease {
  pub feature_freeze: String,
  pub end: String,
}

/// Supported GHES range, as `"{major}.{minor}"` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCompatibility {
  pub minimum_version: String,
  pub maximum_version: String,
}

impl ApiCompatibility {
  fn from_versions(oldest: &Version, newest: &Version) -> Self {
    Self {
      minimum_version: format!("{}.{}", oldest.major, oldest.minor),
      maximum_version: format!("{}.{}", newest.major, newest.minor),
    }
  }
}

/// Compute the supported range as of `now`
pub fn compute_supported_range(
  releases: &BTreeMap<String, EnterpriseRelease>,
  current: &ApiCompatibility,
  window: &SupportWindow,
  now: DateTime<Utc>,
) -> ReleaseResult<ApiCompatibility> {
  let mut newest = parse_release_key(&current.maximum_version).ok_or_else(|| {
    ReleaseError::input(format!(
      "Invalid maximumVersion '{}' in API compatibility file",
      current.maximum_version
    ))
  })?;
  let mut oldest: Option<Version> = None;

  let freeze_horizon = now + Duration::days(window.imminent_feature_freeze_days);

  for (key, release) in releases {
    if window.legacy_release_keys.iter().any(|legacy| legacy == key) {
      tracing::debug!(release = %key, "skipping release with legacy numbering");
      continue;
    }

    let Some(version) = parse_release_key(key) else {
      tracing::debug!(release = %key, "skipping unparseable release key");
      continue;
    };
    if version < window.first_supported_release {
      continue;
    }

    if version > newest {
      let feature_freeze = parse_release_date(&release.feature_freeze)
        .with_context(|| format!("Invalid feature_freeze date for GHES {}", key))?;
      if feature_freeze < freeze_horizon {
        tracing::debug!(release = %key, "feature freeze is imminent, extending maximum");
        newest = version.clone();
      }
    }

    let end_of_life =
      parse_release_date(&release.end).with_context(|| format!("Invalid end date for GHES {}", key))?;
    let retired = now > end_of_life + Duration::days(window.end_of_life_grace_days);

    if !retired && oldest.as_ref().is_none_or(|o| version < *o) {
      oldest = Some(version);
    }
  }

  let oldest = oldest.ok_or_else(|| ReleaseError::Invariant("No oldest supported release found".to_string()))?;

  Ok(ApiCompatibility::from_versions(&oldest, &newest))
}

/// Read both files, recompute the range and overwrite the compatibility file
pub fn update_api_compatibility(
  api_compatibility_path: &Path,
  releases_dir: &Path,
  window: &SupportWindow,
  now: DateTime<Utc>,
) -> ReleaseResult<ApiCompatibility> {
  let current: ApiCompatibility = read_json(api_compatibility_path)?;
  let releases: BTreeMap<String, EnterpriseRelease> = read_json(&releases_dir.join(RELEASES_FILE))?;

  let updated = compute_supported_range(&releases, &current, window, now)?;

  let mut rendered = serde_json::to_string_pretty(&updated)?;
  rendered.push('\n');
  fs::write(api_compatibility_path, rendered)
    .with_context(|| format!("Failed to write {}", api_compatibility_path.display()))?;

  Ok(updated)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> ReleaseResult<T> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// `"3.9"` → `3.9.0`
fn parse_release_key(key: &str) -> Option<Version> {
  Version::parse(&format!("{}.0", key)).ok()
}

/// Dates in the registry are `YYYY-MM-DD` (midnight UTC); RFC 3339 is accepted too
fn parse_release_date(value: &str) -> ReleaseResult<DateTime<Utc>> {
  if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
    return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
  }
  Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}
