//! Version command implementation

use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use crate::core::vcs::SystemGit;
use crate::release::version::{self, BuildMode, DEFAULT_ACTIONS};
use std::env;

/// Run the version command
///
/// Classifies the requested actions, resolves the canonical version and
/// prints the status banner (or the full VersionInfo as JSON).
pub fn run_version(actions: Vec<String>, json: bool) -> ForgeResult<()> {
  let workspace_root = env::current_dir()?;
  let config = ForgeConfig::load_or_default(&workspace_root)?;

  let actions = effective_actions(actions);
  let mode = BuildMode::classify(&actions);

  let git = SystemGit::open(&workspace_root);
  let info = version::resolve(&config.project.base_version, &config.project.suffix, mode, &git);

  if json {
    println!("{}", serde_json::to_string_pretty(&info)?);
    return Ok(());
  }

  println!("{}", info.status_line());

  if let Some(describe) = &info.vcs_describe {
    println!("   Describe: {}", describe);
  }
  if info.vcs_describe.is_none() && info.vcs_branch.is_none() {
    println!("   (no version-control metadata available)");
  }

  Ok(())
}

/// Fall back to the default action set when the caller names none
pub fn effective_actions(actions: Vec<String>) -> Vec<String> {
  if actions.is_empty() {
    DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect()
  } else {
    actions
  }
}
