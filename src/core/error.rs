//! Error types for action-release with contextual messages and exit codes
//!
//! Every CI step fails fast: errors propagate to `main`, are printed with an
//! optional help line, and map onto a small set of process exit codes that the
//! calling workflow consumes.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for action-release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, malformed input files)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Verification failure or violated domain invariant
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for action-release
#[derive(Debug)]
pub enum ReleaseError {
  /// Configuration errors (releases.ini, environment)
  Config(ConfigError),

  /// Malformed or incomplete input documents
  Input(InputError),

  /// One or more verification checks failed
  Verification { failed: Vec<String> },

  /// A domain invariant does not hold for the given inputs
  Invariant(String),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Create an input-format error
  pub fn input(msg: impl Into<String>) -> Self {
    ReleaseError::Input(InputError::Malformed { message: msg.into() })
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ReleaseError::Message { message, context, help } => ReleaseError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      ReleaseError::Input(InputError::Malformed { message }) => ReleaseError::Input(InputError::Malformed {
        message: format!("{}\n{}", message, ctx_str),
      }),
      ReleaseError::Io(err) => ReleaseError::Io(io::Error::new(err.kind(), format!("{}: {}", ctx_str, err))),
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Config(_) => ExitCode::User,
      ReleaseError::Input(_) => ExitCode::User,
      ReleaseError::Verification { .. } => ExitCode::Validation,
      ReleaseError::Invariant(_) => ExitCode::Validation,
      ReleaseError::Io(_) => ExitCode::System,
      ReleaseError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Config(e) => e.help_message(),
      ReleaseError::Verification { .. } => {
        Some("See the `::error::` annotations above for the individual failures.".to_string())
      }
      ReleaseError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::Config(e) => write!(f, "{}", e),
      ReleaseError::Input(e) => write!(f, "{}", e),
      ReleaseError::Verification { failed } => {
        write!(f, "Verification failed: {}", failed.join(", "))
      }
      ReleaseError::Invariant(msg) => write!(f, "{}", msg),
      ReleaseError::Io(e) => write!(f, "I/O error: {}", e),
      ReleaseError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io(err)
  }
}

impl From<serde_json::Error> for ReleaseError {
  fn from(err: serde_json::Error) -> Self {
    ReleaseError::input(format!("JSON error: {}", err))
  }
}

impl From<serde_yaml::Error> for ReleaseError {
  fn from(err: serde_yaml::Error) -> Self {
    ReleaseError::input(format!("YAML error: {}", err))
  }
}

impl From<semver::Error> for ReleaseError {
  fn from(err: semver::Error) -> Self {
    ReleaseError::input(format!("Version parse error: {}", err))
  }
}

impl From<chrono::ParseError> for ReleaseError {
  fn from(err: chrono::ParseError) -> Self {
    ReleaseError::input(format!("Date parse error: {}", err))
  }
}

impl From<regex::Error> for ReleaseError {
  fn from(err: regex::Error) -> Self {
    ReleaseError::message(format!("Invalid pattern: {}", err))
  }
}

impl From<std::num::ParseIntError> for ReleaseError {
  fn from(err: std::num::ParseIntError) -> Self {
    ReleaseError::input(format!("Parse error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// A configuration file does not exist
  NotFound { path: PathBuf },

  /// A required key is missing from a configuration file
  MissingKey { key: String, path: PathBuf },

  /// A required environment variable is not set
  MissingEnv { name: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some("Run from the repository root or pass the path explicitly.".to_string()),
      ConfigError::MissingKey { key, .. } => Some(format!("Add a line of the form `{}=<value>`.", key)),
      ConfigError::MissingEnv { name } => Some(format!("Export {} in the workflow step environment.", name)),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "Configuration file not found: {}", path.display())
      }
      ConfigError::MissingKey { key, path } => {
        write!(f, "Could not find {} in {}", key, path.display())
      }
      ConfigError::MissingEnv { name } => {
        write!(f, "Environment variable {} is not set", name)
      }
    }
  }
}

/// Input document errors
#[derive(Debug)]
pub enum InputError {
  /// Document could not be parsed or is missing an expected field
  Malformed { message: String },

  /// A field holds a value outside its expected shape
  InvalidValue { field: String, value: String, expected: String },
}

impl fmt::Display for InputError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InputError::Malformed { message } => write!(f, "{}", message),
      InputError::InvalidValue { field, value, expected } => {
        write!(f, "Invalid {} '{}': expected {}", field, value, expected)
      }
    }
  }
}

/// Result type alias for action-release
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReleaseError>,
{
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
