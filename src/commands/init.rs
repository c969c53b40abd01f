//! Init command implementation

use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use std::env;
use std::io::{self, Write};

/// Run the init command to scaffold apktool-forge configuration
///
/// Writes a forge.toml carrying the default base version, suffix and module
/// set. An existing configuration is only overwritten after confirmation
/// (or with --force).
pub fn run_init(force: bool) -> ForgeResult<()> {
  let workspace_root = env::current_dir()?;

  if ForgeConfig::exists(&workspace_root) && !force {
    print!("⚠️  Configuration already exists. Overwrite? [y/N]: ");
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    if !response.trim().eq_ignore_ascii_case("y") {
      println!("Aborted.");
      return Ok(());
    }
  }

  let config = ForgeConfig::default_project();
  config.save(&workspace_root)?;

  println!("✅ Wrote forge.toml");
  println!();
  println!("  Base version: {}", config.project.base_version);
  println!("  Suffix:       {}", config.project.suffix);
  println!("  Modules:      {}", config.modules.len());
  println!();
  println!("Next steps:");
  println!("  apktool-forge version          # resolve the snapshot version");
  println!("  apktool-forge plan             # preview publishing configuration");

  Ok(())
}
