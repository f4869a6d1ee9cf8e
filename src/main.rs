mod changelog;
mod checks;
mod ci;
mod commands;
mod core;
mod release;
mod sarif;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use crate::core::config::{DEFAULT_RELEASES_INI, SupportWindow};
use crate::core::error::{ReleaseError, print_error};
use std::path::PathBuf;

/// Release engineering steps for the CodeQL Action workflows
#[derive(Parser)]
#[command(name = "action-release")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Enable debug logging on stderr (overridden by RUST_LOG)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Release branch planning
  #[command(subcommand)]
  Backport(BackportCommands),

  /// Changelog rewrites and extraction
  #[command(subcommand)]
  Changelog(ChangelogCommands),

  /// Post-analysis verification steps
  #[command(subcommand)]
  Verify(VerifyCommands),

  /// Scheduled and release-triggered file updates
  #[command(subcommand)]
  Update(UpdateCommands),
}

#[derive(Subcommand)]
enum BackportCommands {
  /// Compute the source and target branches for a release
  Plan {
    /// Major version being released (e.g. v3)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    major_version: String,
    /// Most recent release tag (e.g. 3.28.1)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    latest_tag: String,
    /// Release configuration holding OLDEST_SUPPORTED_MAJOR_VERSION
    #[arg(long, default_value = DEFAULT_RELEASES_INI)]
    releases_ini: PathBuf,
    /// Step output file
    #[arg(long, env = "GITHUB_OUTPUT", hide_env_values = true)]
    github_output: Option<PathBuf>,
  },
}

#[derive(Subcommand)]
enum ChangelogCommands {
  /// Print the release notes for a version
  Extract {
    /// Path to the changelog
    changelog: PathBuf,
    /// Tag the full changelog link points at (e.g. v3.28.1)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    version_tag: String,
  },

  /// Print the changelog for a rollback release
  Rollback {
    /// Version the rollback is identical to
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    target_version: String,
    /// Version being rolled back
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    rollback_version: String,
    /// Version of the rollback release
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    new_version: String,
    /// Path to the changelog
    #[arg(long, default_value = changelog::DEFAULT_CHANGELOG)]
    changelog: PathBuf,
  },

  /// Stamp the [UNRELEASED] section with a version and today's date
  Finalize {
    /// Version being released
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    version: String,
    /// Path to the changelog
    #[arg(long, default_value = changelog::DEFAULT_CHANGELOG)]
    changelog: PathBuf,
  },

  /// Renumber package.json and the changelog for an older release branch
  Backport {
    /// Branch being backported from (releases/vN)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    source_branch: String,
    /// Branch being backported to (releases/vN)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    target_branch: String,
    /// Path to the changelog
    #[arg(long, default_value = changelog::DEFAULT_CHANGELOG)]
    changelog: PathBuf,
    /// Path to package.json
    #[arg(long, default_value = release::package_json::DEFAULT_PACKAGE_JSON)]
    package_json: PathBuf,
    /// Step output file
    #[arg(long, env = "GITHUB_OUTPUT", hide_env_values = true)]
    github_output: Option<PathBuf>,
  },
}

#[derive(Subcommand)]
enum VerifyCommands {
  /// Check which queries a SARIF file reports as run
  Sarif {
    /// SARIF file produced by the analysis
    sarif_file: PathBuf,
    /// Comma-separated query IDs that must have run
    #[arg(long, default_value = "")]
    queries_run: String,
    /// Comma-separated query IDs that must not have run
    #[arg(long, default_value = "")]
    queries_not_run: String,
  },

  /// Compare the code scanning configuration with an expected one
  Config {
    /// Expected configuration as JSON (empty when no configuration is expected)
    #[arg(long, allow_hyphen_values = true)]
    expected: String,
    /// YAML configuration file written by the action
    actual: PathBuf,
  },

  /// Fail unless the debug artifact scan finished
  ArtifactScan {
    /// Completion flag set by the artifact scanner
    #[arg(long, env = checks::ARTIFACT_SCAN_FINISHED_ENV)]
    finished: Option<String>,
  },
}

#[derive(Subcommand)]
enum UpdateCommands {
  /// Recompute the supported GitHub Enterprise Server range
  EnterpriseVersions {
    /// API compatibility file to rewrite
    #[arg(long, default_value = release::enterprise::DEFAULT_API_COMPATIBILITY_PATH)]
    api_compatibility: PathBuf,
    /// Directory containing releases.json
    #[arg(long, env = "ENTERPRISE_RELEASES_PATH")]
    releases_dir: Option<PathBuf>,
    /// Days ahead of a feature freeze at which a release becomes supported
    #[arg(long)]
    feature_freeze_days: Option<i64>,
    /// Days after end of life during which a release stays supported
    #[arg(long)]
    end_of_life_grace_days: Option<i64>,
  },

  /// Point the defaults at the bundle release that triggered the workflow
  Bundle {
    /// Defaults file to rewrite
    #[arg(long, default_value = release::bundle::DEFAULT_DEFAULTS_PATH)]
    defaults: PathBuf,
    /// Workflow event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn init_tracing(verbose: bool) {
  let default_filter = if verbose { "debug" } else { "warn" };
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let result = match cli.command {
    Commands::Backport(BackportCommands::Plan {
      major_version,
      latest_tag,
      releases_ini,
      github_output,
    }) => commands::run_backport_plan(
      &major_version,
      &latest_tag,
      &releases_ini,
      &ci::OutputSink::new(github_output),
    ),

    Commands::Changelog(changelog_cmd) => match changelog_cmd {
      ChangelogCommands::Extract { changelog, version_tag } => commands::run_changelog_extract(&changelog, &version_tag),
      ChangelogCommands::Rollback {
        target_version,
        rollback_version,
        new_version,
        changelog,
      } => commands::run_changelog_rollback(
        &changelog,
        &crate::changelog::rollback::RollbackVersions {
          target: target_version,
          rollback: rollback_version,
          new: new_version,
        },
      ),
      ChangelogCommands::Finalize { version, changelog } => commands::run_changelog_finalize(&changelog, &version),
      ChangelogCommands::Backport {
        source_branch,
        target_branch,
        changelog,
        package_json,
        github_output,
      } => commands::run_changelog_backport(
        &source_branch,
        &target_branch,
        &changelog,
        &package_json,
        &ci::OutputSink::new(github_output),
      ),
    },

    Commands::Verify(verify_cmd) => match verify_cmd {
      VerifyCommands::Sarif {
        sarif_file,
        queries_run,
        queries_not_run,
      } => commands::run_verify_sarif(&sarif_file, &queries_run, &queries_not_run),
      VerifyCommands::Config { expected, actual } => commands::run_verify_config(&actual, &expected),
      VerifyCommands::ArtifactScan { finished } => commands::run_verify_artifact_scan(finished),
    },

    Commands::Update(update_cmd) => match update_cmd {
      UpdateCommands::EnterpriseVersions {
        api_compatibility,
        releases_dir,
        feature_freeze_days,
        end_of_life_grace_days,
      } => {
        let mut window = SupportWindow::default();
        if let Some(days) = feature_freeze_days {
          window.imminent_feature_freeze_days = days;
        }
        if let Some(days) = end_of_life_grace_days {
          window.end_of_life_grace_days = days;
        }
        commands::run_update_enterprise_versions(&api_compatibility, releases_dir, &window)
      }
      UpdateCommands::Bundle { defaults, event_path } => commands::run_update_bundle(&defaults, event_path),
    },
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
