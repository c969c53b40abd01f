//! System git backend - zero dependencies, fail-soft queries
//!
//! The two queries the version resolver needs (describe-tag, current branch)
//! run system git once each per invocation and capture stdout. Every failure
//! mode — git missing from PATH, non-zero exit, undecodable output — degrades
//! to `None`. Version resolution must keep working on tarball checkouts and
//! CI runners without git metadata, so nothing here returns an error.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Point at a working directory; no subprocess runs until a query does.
  pub fn open(path: &Path) -> Self {
    Self {
      repo_path: path.to_path_buf(),
    }
  }

  /// Describe the current commit relative to the nearest tag
  ///
  /// Runs `git describe --tags` and returns its trimmed stdout, or `None`
  /// when the query cannot be answered (no repo, no tags, no git).
  pub fn describe(&self) -> Option<String> {
    self.query(&["describe", "--tags"])
  }

  /// Get the current symbolic branch name
  ///
  /// Runs `git rev-parse --abbrev-ref HEAD`; `None` on any failure.
  pub fn branch(&self) -> Option<String> {
    self.query(&["rev-parse", "--abbrev-ref", "HEAD"])
  }

  /// Run one git query and capture a single trimmed line of stdout
  ///
  /// One attempt, no retries. Failures are absorbed, never propagated.
  fn query(&self, args: &[&str]) -> Option<String> {
    let output = self.git_cmd().args(args).output().ok()?;

    if !output.status.success() {
      return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let trimmed = stdout.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    // Force safe behavior (override user config)
    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("advice.detachedHead=false");

    cmd
  }
}
