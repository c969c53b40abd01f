//! Canonical version resolution for a build invocation
//!
//! Turns the static base version/suffix plus two optional git queries into
//! one immutable `VersionInfo`. Resolution is a pure function of its inputs:
//! running it twice against the same git state yields the same value, and it
//! never fails — absent git metadata degrades to the static scheme.

use crate::core::vcs::SystemGit;
use serde::{Deserialize, Serialize};

/// How the current invocation was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  /// Snapshot build; version carries the configured suffix
  Development,
  /// Official release; version stamping is delegated to the release procedure
  Release,
}

/// The action name whose presence switches an invocation to Release mode
pub const RELEASE_ACTION: &str = "release";

/// Actions assumed when the caller names none (the upstream default tasks)
pub const DEFAULT_ACTIONS: &[&str] = &["build", "shadowJar", "proguard"];

impl BuildMode {
  /// Classify a requested action set
  ///
  /// Release iff the literal action "release" is requested. Pure and total;
  /// unknown action names are ignored.
  pub fn classify<S: AsRef<str>>(actions: &[S]) -> Self {
    if actions.iter().any(|a| a.as_ref() == RELEASE_ACTION) {
      BuildMode::Release
    } else {
      BuildMode::Development
    }
  }

  pub fn is_release(self) -> bool {
    self == BuildMode::Release
  }
}

impl std::fmt::Display for BuildMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      BuildMode::Development => write!(f, "development"),
      BuildMode::Release => write!(f, "release"),
    }
  }
}

/// Resolved version identity for one build invocation
///
/// Created once by [`resolve`], immutable afterwards. `resolved` is the only
/// field downstream publishing consumes; the rest is for the status banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
  pub base_version: String,
  pub suffix: String,
  pub mode: BuildMode,

  /// Normalized `git describe --tags` output, when available
  pub vcs_describe: Option<String>,

  /// Current branch name, when available
  pub vcs_branch: Option<String>,

  /// Commit revision string; always empty in development mode
  pub revision: String,

  /// The canonical version every publication uses
  pub resolved: String,
}

impl VersionInfo {
  /// Human-readable build banner, mirroring the upstream lifecycle log line
  pub fn status_line(&self) -> String {
    let branch = self.vcs_branch.as_deref().unwrap_or("unknown");
    match self.mode {
      BuildMode::Development => format!("Building SNAPSHOT ({}): {}", branch, self.resolved),
      BuildMode::Release => format!("Building RELEASE ({}): version stamped by the release procedure", branch),
    }
  }
}

/// Resolve the canonical version for this invocation
///
/// Development: `base` or `base-suffix`, revision cleared to empty. The
/// describe output is not trusted for the resolved value in this mode; it is
/// kept (normalized) for logging only.
///
/// Release: the resolver performs no action. `resolved` stays empty and is
/// stamped by the external release procedure.
pub fn resolve(base_version: &str, suffix: &str, mode: BuildMode, git: &SystemGit) -> VersionInfo {
  let vcs_describe = git.describe().map(|d| normalize_describe(&d));
  let vcs_branch = git.branch();

  let resolved = match mode {
    BuildMode::Development => {
      if suffix.is_empty() {
        base_version.to_string()
      } else {
        format!("{}-{}", base_version, suffix)
      }
    }
    BuildMode::Release => String::new(),
  };

  VersionInfo {
    base_version: base_version.to_string(),
    suffix: suffix.to_string(),
    mode,
    vcs_describe,
    vcs_branch,
    revision: String::new(),
    resolved,
  }
}

/// Normalize a raw `git describe --tags` string for display
///
/// Replaces the "N commits since tag" marker `-g<hash>` with a plain
/// `-<hash>` separator: "v3.0.0-4-gabc1234" becomes "v3.0.0-4-abc1234".
/// One substitution of the marker, never a full hash strip; strings without
/// the marker pass through untouched.
pub fn normalize_describe(raw: &str) -> String {
  if let Ok(re) = regex::Regex::new(r"-g([0-9a-f]{4,40})") {
    re.replace(raw, "-$1").into_owned()
  } else {
    raw.to_string()
  }
}
