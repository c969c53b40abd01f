//! Integration tests for `apktool-forge plan`

use crate::helpers::{TestWorkspace, run_forge, run_forge_env, stdout_str};
use anyhow::Result;

#[test]
fn test_plan_selects_publishable_modules_only() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config("3.0.0", "SNAPSHOT", &["apktool-cli", "internal-tests", "apktool-lib"])?;

  let output = run_forge(&ws.path, &["plan", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&stdout_str(&output))?;

  let records = json["records"].as_array().expect("records array");
  let artifacts: Vec<&str> = records.iter().filter_map(|r| r["artifact_id"].as_str()).collect();
  assert_eq!(artifacts, vec!["apktool-cli", "apktool-lib"]);
  Ok(())
}

#[test]
fn test_plan_records_share_single_source_of_truth() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config("3.0.0", "SNAPSHOT", &["apktool-cli", "brut.j.util"])?;

  let output = run_forge(&ws.path, &["plan", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&stdout_str(&output))?;

  let records = json["records"].as_array().expect("records array");
  assert_eq!(records.len(), 2);

  for record in records {
    assert_eq!(record["version"], "3.0.0-SNAPSHOT");
    assert_eq!(record["group_id"], "app.morphe");
    assert_eq!(record["repository_url"], "https://maven.pkg.github.com/MorpheApp/Apktool");
    assert_eq!(record["signing_required"], true);
  }
  assert_ne!(records[0]["artifact_id"], records[1]["artifact_id"]);

  // Shared metadata appears once, at the plan level
  assert_eq!(json["metadata"]["display_name"], "Apktool");
  assert_eq!(json["metadata"]["license_name"], "The Apache License 2.0");
  Ok(())
}

#[test]
fn test_plan_redacts_credentials() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config("3.0.0", "SNAPSHOT", &["apktool-cli"])?;

  let output = run_forge_env(
    &ws.path,
    &["plan", "--json"],
    &[("GITHUB_ACTOR", "octocat"), ("GITHUB_TOKEN", "ghp_secret_value")],
  )?;
  let stdout = stdout_str(&output);

  assert!(!stdout.contains("ghp_secret_value"), "token leaked into output");
  assert!(!stdout.contains("octocat"), "actor leaked into output");

  let json: serde_json::Value = serde_json::from_str(&stdout)?;
  assert_eq!(json["credentials"]["username"], "<set>");
  assert_eq!(json["credentials"]["token"], "<set>");
  Ok(())
}

#[test]
fn test_plan_absent_credentials_do_not_fail() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config("3.0.0", "SNAPSHOT", &["apktool-cli"])?;

  // No env vars, no gpr properties: planning still succeeds
  let output = run_forge(&ws.path, &["plan", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&stdout_str(&output))?;

  assert_eq!(json["credentials"]["username"], "<absent>");
  assert_eq!(json["credentials"]["token"], "<absent>");
  Ok(())
}

#[test]
fn test_plan_release_mode() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config("3.0.0", "SNAPSHOT", &["apktool-cli"])?;

  let output = run_forge(&ws.path, &["plan", "--json", "release"])?;
  let json: serde_json::Value = serde_json::from_str(&stdout_str(&output))?;

  assert_eq!(json["mode"], "release");
  Ok(())
}

#[test]
fn test_plan_default_actions_are_development() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config("3.0.0", "SNAPSHOT", &["apktool-cli"])?;

  let output = run_forge(&ws.path, &["plan", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&stdout_str(&output))?;

  assert_eq!(json["mode"], "development");
  assert_eq!(json["version"], "3.0.0-SNAPSHOT");
  Ok(())
}

#[test]
fn test_plan_without_config_uses_default_module_set() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_forge(&ws.path, &["plan", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&stdout_str(&output))?;

  // All seven upstream modules are publishable
  let records = json["records"].as_array().expect("records array");
  assert_eq!(records.len(), 7);
  Ok(())
}

#[test]
fn test_plan_id_is_stable_across_runs() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_config("3.0.0", "SNAPSHOT", &["apktool-cli"])?;

  let a: serde_json::Value = serde_json::from_str(&stdout_str(&run_forge(&ws.path, &["plan", "--json"])?))?;
  let b: serde_json::Value = serde_json::from_str(&stdout_str(&run_forge(&ws.path, &["plan", "--json"])?))?;

  assert_eq!(a["id"], b["id"]);
  Ok(())
}
