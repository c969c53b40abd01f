//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A test project directory, optionally with git history
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create a bare project directory (no git metadata)
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Create a project directory with an initialized git repo
  pub fn with_git() -> Result<Self> {
    let ws = Self::new()?;

    git(&ws.path, &["init", "--initial-branch=main"])?;
    git(&ws.path, &["config", "user.name", "Test User"])?;
    git(&ws.path, &["config", "user.email", "test@example.com"])?;

    std::fs::write(ws.path.join("README.md"), "# test project\n")?;
    git(&ws.path, &["add", "."])?;
    git(&ws.path, &["commit", "-m", "Initial project setup"])?;

    Ok(ws)
  }

  /// Write a forge.toml with the given base version, suffix and module set
  pub fn write_config(&self, base_version: &str, suffix: &str, modules: &[&str]) -> Result<()> {
    let mut config = format!(
      "[project]\nbase_version = \"{}\"\nsuffix = \"{}\"\n",
      base_version, suffix
    );
    for module in modules {
      config.push_str(&format!("\n[[modules]]\nname = \"{}\"\n", module));
    }
    std::fs::write(self.path.join("forge.toml"), config)?;
    Ok(())
  }

  /// Commit current changes
  pub fn commit(&self, message: &str) -> Result<()> {
    git(&self.path, &["add", "."])?;
    git(&self.path, &["commit", "--allow-empty", "-m", message])?;
    Ok(())
  }

  /// Create an annotated tag at HEAD
  pub fn tag(&self, name: &str) -> Result<()> {
    git(&self.path, &["tag", "-a", name, "-m", name])?;
    Ok(())
  }

  /// Check if a file exists
  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  /// Read a file
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run the apktool-forge CLI with a scrubbed credential environment
pub fn run_forge(cwd: &Path, args: &[&str]) -> Result<Output> {
  run_forge_env(cwd, args, &[])
}

/// Run the apktool-forge CLI with explicit credential environment variables
pub fn run_forge_env(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Result<Output> {
  let forge_bin = env!("CARGO_BIN_EXE_apktool-forge");

  let mut cmd = Command::new(forge_bin);
  cmd.current_dir(cwd).args(args);

  // Credential resolution must be deterministic regardless of the host CI
  cmd.env_remove("GITHUB_ACTOR");
  cmd.env_remove("GITHUB_TOKEN");
  for (key, value) in envs {
    cmd.env(key, value);
  }

  let output = cmd.output().context("Failed to run apktool-forge")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "apktool-forge command failed: apktool-forge {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Decode stdout as UTF-8
pub fn stdout_str(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}
