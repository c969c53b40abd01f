//! Plan command implementation
//!
//! The full orchestration pass: classify the invocation, resolve the
//! canonical version, resolve credentials, select publishable modules and
//! assemble one publication record per selected module. Output only; the
//! actual publish/sign step consumes the plan downstream.

use crate::commands::version::effective_actions;
use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use crate::core::vcs::SystemGit;
use crate::release::credentials;
use crate::release::publish::PublishPlan;
use crate::release::version::{self, BuildMode};
use std::env;

/// Run the plan command
pub fn run_plan(actions: Vec<String>, json: bool) -> ForgeResult<()> {
  let workspace_root = env::current_dir()?;
  let config = ForgeConfig::load_or_default(&workspace_root)?;

  let actions = effective_actions(actions);
  let mode = BuildMode::classify(&actions);

  let git = SystemGit::open(&workspace_root);
  let info = version::resolve(&config.project.base_version, &config.project.suffix, mode, &git);
  let creds = credentials::resolve(&config.credentials);

  let plan = PublishPlan::assemble(&info, &config.module_names(), creds);

  if json {
    println!("{}", serde_json::to_string_pretty(&plan)?);
    return Ok(());
  }

  print_plan(&info, &plan, &actions);
  Ok(())
}

fn print_plan(info: &version::VersionInfo, plan: &PublishPlan, actions: &[String]) {
  println!("{}", info.status_line());
  println!();
  println!("📦 Publish Plan {}", plan.id);
  println!();
  println!("  Actions:    {}", actions.join(", "));
  println!("  Mode:       {}", plan.mode);
  if plan.mode.is_release() {
    println!("  Version:    (stamped by the external release procedure)");
  } else {
    println!("  Version:    {}", plan.version);
  }
  println!("  Repository: {}", crate::release::publish::REPOSITORY_URL);

  if plan.credentials.is_complete() {
    println!("  Credentials: resolved");
  } else {
    let missing = match (plan.credentials.username().is_some(), plan.credentials.token().is_some()) {
      (false, false) => "username, token",
      (false, true) => "username",
      _ => "token",
    };
    println!("  Credentials: missing {} (publish will fail at authentication)", missing);
  }
  println!();

  if plan.records.is_empty() {
    println!("  No publishable modules in the configured set");
    return;
  }

  println!("  Publications:");
  for record in &plan.records {
    let signing = if record.signing_required { "signed" } else { "unsigned" };
    println!("    {}:{} ({})", record.group_id, record.artifact_id, signing);
  }

  println!();
  println!("{} publication(s) configured", plan.records.len());
}
