//! Publishable-module selection
//!
//! The set of modules eligible for publishing is a fixed, closed allow-list:
//! it encodes which subprojects are public release artifacts. Anything not
//! on the list fails closed — no credentials, no signing, no publication.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Modules eligible to produce signed packages for the remote repository
const PUBLISHABLE_MODULES: &[&str] = &[
  "brut.j.common",
  "brut.j.util",
  "brut.j.dir",
  "brut.j.xml",
  "brut.j.yaml",
  "apktool-lib",
  "apktool-cli",
];

/// One subproject with its static publishing classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
  pub name: String,
  pub publishable: bool,
}

/// Classifies module names against the fixed allow-list
pub struct ModuleSelector {
  allow_list: BTreeSet<&'static str>,
}

impl ModuleSelector {
  /// Build the selector over the closed allow-list
  pub fn new() -> Self {
    Self {
      allow_list: PUBLISHABLE_MODULES.iter().copied().collect(),
    }
  }

  /// Whether a module may be published; unknown names fail closed
  pub fn is_publishable(&self, module_name: &str) -> bool {
    self.allow_list.contains(module_name)
  }

  /// Classify a full module set into descriptors
  pub fn classify<S: AsRef<str>>(&self, module_names: &[S]) -> Vec<ModuleDescriptor> {
    module_names
      .iter()
      .map(|name| ModuleDescriptor {
        name: name.as_ref().to_string(),
        publishable: self.is_publishable(name.as_ref()),
      })
      .collect()
  }

  /// The publishable subset of a module set, in input order
  pub fn select<S: AsRef<str>>(&self, module_names: &[S]) -> Vec<String> {
    module_names
      .iter()
      .map(|n| n.as_ref())
      .filter(|n| self.is_publishable(n))
      .map(String::from)
      .collect()
  }
}

impl Default for ModuleSelector {
  fn default() -> Self {
    Self::new()
  }
}
