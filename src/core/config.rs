use crate::core::error::{ConfigError, ForgeError, ForgeResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for apktool-forge
/// Searched in order: forge.toml, .forge.toml, .config/forge.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub credentials: CredentialConfig,
  #[serde(default)]
  pub modules: Vec<ModuleConfig>,
}

/// Static version inputs for the resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
  /// Base version every build derives from (e.g. "3.0.0")
  pub base_version: String,

  /// Suffix appended to development builds (e.g. "SNAPSHOT"); empty = none
  #[serde(default = "default_suffix")]
  pub suffix: String,
}

fn default_suffix() -> String {
  "SNAPSHOT".to_string()
}

/// Local-property fallbacks for repository credentials
///
/// Environment variables (GITHUB_ACTOR / GITHUB_TOKEN) always win over
/// these values. Both may be absent; resolution never fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialConfig {
  #[serde(default)]
  pub gpr_user: Option<String>,

  #[serde(default)]
  pub gpr_key: Option<String>,
}

/// One subproject of the orchestrated build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleConfig {
  pub name: String,
}

/// Subprojects of the upstream Apktool build, used when no forge.toml
/// declares a module set.
pub const DEFAULT_MODULES: &[&str] = &[
  "brut.j.common",
  "brut.j.util",
  "brut.j.dir",
  "brut.j.xml",
  "brut.j.yaml",
  "apktool-lib",
  "apktool-cli",
];

impl ProjectConfig {
  /// Validate version inputs
  pub fn validate(&self) -> ForgeResult<()> {
    if semver::Version::parse(&self.base_version).is_err() {
      return Err(ForgeError::with_help(
        format!(
          "Invalid base_version '{}'. Must be valid semver (e.g., '3.0.0')",
          self.base_version
        ),
        "Fix the [project] section in forge.toml",
      ));
    }

    if self.suffix.chars().any(char::is_whitespace) {
      return Err(ForgeError::with_help(
        format!("Invalid suffix '{}'. Must not contain whitespace", self.suffix),
        "Fix the [project] section in forge.toml",
      ));
    }

    Ok(())
  }
}

impl ForgeConfig {
  /// Find config file in search order: forge.toml, .forge.toml, .config/forge.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("forge.toml"),
      path.join(".forge.toml"),
      path.join(".config").join("forge.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from forge.toml (searches multiple locations)
  pub fn load(path: &Path) -> ForgeResult<Self> {
    let config_path = Self::find_config_path(path).ok_or_else(|| {
      ForgeError::Config(ConfigError::NotFound {
        workspace_root: path.to_path_buf(),
      })
    })?;

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: ForgeConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config
      .project
      .validate()
      .with_context(|| format!("Invalid project configuration in {}", config_path.display()))?;

    Ok(config)
  }

  /// Load config, falling back to built-in defaults when no file exists
  pub fn load_or_default(path: &Path) -> ForgeResult<Self> {
    match Self::load(path) {
      Ok(config) => Ok(config),
      Err(ForgeError::Config(ConfigError::NotFound { .. })) => Ok(Self::default_project()),
      Err(e) => Err(e),
    }
  }

  /// Save config to forge.toml (default location)
  pub fn save(&self, path: &Path) -> ForgeResult<()> {
    let config_path = path.join("forge.toml");
    let content = toml_edit::ser::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(())
  }

  /// Check if config exists at the given path
  pub fn exists(path: &Path) -> bool {
    Self::find_config_path(path).is_some()
  }

  /// Built-in configuration mirroring the upstream Apktool build
  pub fn default_project() -> Self {
    Self {
      project: ProjectConfig {
        base_version: "3.0.0".to_string(),
        suffix: default_suffix(),
      },
      credentials: CredentialConfig::default(),
      modules: DEFAULT_MODULES
        .iter()
        .map(|name| ModuleConfig { name: name.to_string() })
        .collect(),
    }
  }

  /// Names of every configured subproject
  pub fn module_names(&self) -> Vec<&str> {
    self.modules.iter().map(|m| m.name.as_str()).collect()
  }
}
