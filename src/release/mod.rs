//! Release bookkeeping for the action's release branches
//!
//! # Release lines
//!
//! Every major version of the action lives on a `releases/vN` branch. A release
//! made from the newest line is backported to every older line down to
//! `OLDEST_SUPPORTED_MAJOR_VERSION` (from `.github/releases.ini`).
//!
//! # Modules
//!
//! - **backport**: Source and target branches for a release
//! - **package_json**: Version rewrites in `package.json` for backports
//! - **enterprise**: Supported GitHub Enterprise Server range (`api-compatibility.json`)
//! - **bundle**: Default CodeQL bundle bump (`defaults.json`)

pub mod backport;
pub mod bundle;
pub mod enterprise;
pub mod package_json;

pub use backport::BackportPlan;
