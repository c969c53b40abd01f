//! Modules command implementation

use crate::core::config::ForgeConfig;
use crate::core::error::ForgeResult;
use crate::release::modules::{ModuleDescriptor, ModuleSelector};
use std::env;

/// Run the modules command: list every configured module and whether it is
/// eligible for publishing.
pub fn run_modules(json: bool) -> ForgeResult<()> {
  let workspace_root = env::current_dir()?;
  let config = ForgeConfig::load_or_default(&workspace_root)?;

  let selector = ModuleSelector::new();
  let descriptors = selector.classify(&config.module_names());

  if json {
    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    return Ok(());
  }

  print_modules(&descriptors);
  Ok(())
}

fn print_modules(descriptors: &[ModuleDescriptor]) {
  if descriptors.is_empty() {
    println!("⚠️  No modules configured in forge.toml");
    println!();
    println!("Add a module entry:");
    println!("  [[modules]]");
    println!("  name = \"apktool-lib\"");
    return;
  }

  println!("📋 Modules");
  println!();

  for descriptor in descriptors {
    let marker = if descriptor.publishable { "📦" } else { "  " };
    let label = if descriptor.publishable { "publishable" } else { "not published" };
    println!("{} {:<16} {}", marker, descriptor.name, label);
  }

  let publishable = descriptors.iter().filter(|d| d.publishable).count();
  println!();
  println!("{} of {} module(s) publishable", publishable, descriptors.len());
}
