use crate::core::error::{ConfigError, ReleaseError, ReleaseResult, ResultExt};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the release configuration, relative to the repository root
pub const DEFAULT_RELEASES_INI: &str = ".github/releases.ini";

const OLDEST_SUPPORTED_MAJOR_VERSION_KEY: &str = "OLDEST_SUPPORTED_MAJOR_VERSION";

/// Release-branch configuration read from `releases.ini`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasesConfig {
  /// Oldest major version that still receives backports
  pub oldest_supported_major_version: u64,
}

impl ReleasesConfig {
  /// Load `releases.ini` from the given path
  pub fn load(path: &Path) -> ReleaseResult<Self> {
    if !path.exists() {
      return Err(ReleaseError::Config(ConfigError::NotFound {
        path: path.to_path_buf(),
      }));
    }

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Self::parse(&content, path)
  }

  /// Parse `releases.ini` content. `origin` is only used in error messages.
  pub fn parse(content: &str, origin: &Path) -> ReleaseResult<Self> {
    let pattern = Regex::new(&format!(r"{}=(\d+)", OLDEST_SUPPORTED_MAJOR_VERSION_KEY))?;

    let captures = pattern.captures(content).ok_or_else(|| {
      ReleaseError::Config(ConfigError::MissingKey {
        key: OLDEST_SUPPORTED_MAJOR_VERSION_KEY.to_string(),
        path: origin.to_path_buf(),
      })
    })?;

    let oldest_supported_major_version = captures[1].parse::<u64>()?;

    Ok(Self {
      oldest_supported_major_version,
    })
  }
}

/// Support window for GitHub Enterprise Server releases
///
/// The day counts are hand-tuned: a release is announced as supported once its
/// feature freeze is less than `imminent_feature_freeze_days` away, and is
/// retired only after `end_of_life_grace_days` have passed since its end date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportWindow {
  pub imminent_feature_freeze_days: i64,
  pub end_of_life_grace_days: i64,

  /// Releases older than this did not include code scanning
  pub first_supported_release: semver::Version,

  /// Keys using an obsolete numbering scheme, dropped before processing
  pub legacy_release_keys: Vec<String>,
}

fn default_imminent_feature_freeze_days() -> i64 {
  14
}

fn default_end_of_life_grace_days() -> i64 {
  7
}

fn default_first_supported_release() -> semver::Version {
  semver::Version::new(2, 22, 0)
}

fn default_legacy_release_keys() -> Vec<String> {
  vec!["11.10".to_string()]
}

impl Default for SupportWindow {
  fn default() -> Self {
    Self {
      imminent_feature_freeze_days: default_imminent_feature_freeze_days(),
      end_of_life_grace_days: default_end_of_life_grace_days(),
      first_supported_release: default_first_supported_release(),
      legacy_release_keys: default_legacy_release_keys(),
    }
  }
}

/// Read a required environment variable as a path
pub fn require_env_path(name: &str, value: Option<PathBuf>) -> ReleaseResult<PathBuf> {
  value.ok_or_else(|| {
    ReleaseError::Config(ConfigError::MissingEnv {
      name: name.to_string(),
    })
  })
}
