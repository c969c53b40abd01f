//! Integration tests for `apktool-forge init`

use crate::helpers::{TestWorkspace, run_forge, stdout_str};
use anyhow::Result;

#[test]
fn test_init_scaffolds_config() -> Result<()> {
  let ws = TestWorkspace::new()?;

  run_forge(&ws.path, &["init"])?;

  assert!(ws.file_exists("forge.toml"));
  let content = ws.read_file("forge.toml")?;
  assert!(content.contains("base_version"));
  assert!(content.contains("apktool-cli"));
  Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
  let ws = TestWorkspace::new()?;
  std::fs::write(ws.path.join("forge.toml"), "stale content")?;

  run_forge(&ws.path, &["init", "--force"])?;

  let content = ws.read_file("forge.toml")?;
  assert!(content.contains("base_version"));
  Ok(())
}

#[test]
fn test_init_output_names_next_steps() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_forge(&ws.path, &["init"])?;
  let stdout = stdout_str(&output);

  assert!(stdout.contains("Wrote forge.toml"));
  assert!(stdout.contains("apktool-forge plan"));
  Ok(())
}

#[test]
fn test_init_config_round_trips_through_version() -> Result<()> {
  let ws = TestWorkspace::new()?;
  run_forge(&ws.path, &["init"])?;

  let output = run_forge(&ws.path, &["version", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&stdout_str(&output))?;
  assert_eq!(json["resolved"], "3.0.0-SNAPSHOT");
  Ok(())
}
