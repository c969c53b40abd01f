//! Publishing orchestration: one publication record per publishable module
//!
//! Produces configuration only. No network I/O and no cryptography happen
//! here; the plan is consumed by an external publish/sign step. The shared
//! pieces (project metadata, credentials, resolved version) are held once by
//! the plan and referenced by every record, so no module can diverge.

use crate::release::credentials::Credentials;
use crate::release::modules::ModuleSelector;
use crate::release::version::{BuildMode, VersionInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Maven coordinates group for every published artifact
pub const GROUP_ID: &str = "app.morphe";

/// Fixed target repository for publications
pub const REPOSITORY_URL: &str = "https://maven.pkg.github.com/MorpheApp/Apktool";

/// Plan identifier (SHA256 hash of plan contents)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanId(String);

impl PlanId {
  /// Create a plan ID from plan contents
  pub fn from_contents(contents: &[u8]) -> Self {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    let result = hasher.finalize();
    Self(format!("{:x}", result))
  }

  /// Get the short ID (first 12 characters)
  pub fn short(&self) -> &str {
    &self.0[..12.min(self.0.len())]
  }
}

impl fmt::Display for PlanId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.short())
  }
}

/// One developer identity attached to every publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Developer {
  pub id: &'static str,
  pub name: &'static str,
  pub email: &'static str,
}

/// Project metadata identical for every publishable module
///
/// One immutable value object per plan; records never copy it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
  pub display_name: &'static str,
  pub description: &'static str,
  pub url: &'static str,
  pub license_name: &'static str,
  pub license_url: &'static str,
  pub scm_connection: &'static str,
  pub scm_developer_connection: &'static str,
  pub scm_url: &'static str,
  pub developers: Vec<Developer>,
}

impl ProjectMetadata {
  /// The fixed Apktool publication metadata
  pub fn apktool() -> Self {
    Self {
      display_name: "Apktool",
      description: "A tool for reverse engineering Android apk files.",
      url: "https://apktool.org",
      license_name: "The Apache License 2.0",
      license_url: "https://opensource.org/licenses/Apache-2.0",
      scm_connection: "scm:git:git://github.com/MorpheApp/Apktool.git",
      scm_developer_connection: "scm:git:git@github.com:MorpheApp/Apktool.git",
      scm_url: "https://github.com/MorpheApp/Apktool",
      developers: vec![
        Developer {
          id: "iBotPeaches",
          name: "Connor Tumbleson",
          email: "connor.tumbleson@gmail.com",
        },
        Developer {
          id: "brutall",
          name: "Ryszard Wiśniewski",
          email: "brut.alll@gmail.com",
        },
      ],
    }
  }
}

/// Publication configuration for a single publishable module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationRecord {
  pub group_id: &'static str,

  /// Artifact id is always the module name
  pub artifact_id: String,

  /// Resolved version shared by the whole plan
  pub version: String,

  pub repository_url: &'static str,

  /// Signing obligation registered on the publication as a unit
  pub signing_required: bool,
}

/// The full publishing configuration for one build invocation
#[derive(Debug, Clone, Serialize)]
pub struct PublishPlan {
  pub id: PlanId,
  pub mode: BuildMode,
  pub version: String,

  /// Single metadata instance referenced by every record
  pub metadata: ProjectMetadata,

  /// Single credentials instance shared by every record (redacted in output)
  pub credentials: Credentials,

  pub records: Vec<PublicationRecord>,
  pub generated_at: DateTime<Utc>,
}

impl PublishPlan {
  /// Assemble the plan for a resolved version and a configured module set
  ///
  /// Non-publishable modules are left untouched: no record, no credentials,
  /// no signing obligation.
  pub fn assemble<S: AsRef<str>>(version: &VersionInfo, module_names: &[S], credentials: Credentials) -> Self {
    let selector = ModuleSelector::new();
    let selected = selector.select(module_names);

    let records: Vec<PublicationRecord> = selected
      .into_iter()
      .map(|name| PublicationRecord {
        group_id: GROUP_ID,
        artifact_id: name,
        version: version.resolved.clone(),
        repository_url: REPOSITORY_URL,
        signing_required: true,
      })
      .collect();

    let id = Self::compute_id(&version.resolved, &records);

    Self {
      id,
      mode: version.mode,
      version: version.resolved.clone(),
      metadata: ProjectMetadata::apktool(),
      credentials,
      records,
      generated_at: Utc::now(),
    }
  }

  /// Stable plan id over artifact identities; excludes the timestamp
  fn compute_id(version: &str, records: &[PublicationRecord]) -> PlanId {
    let mut contents = String::new();
    contents.push_str(version);
    contents.push('\n');
    contents.push_str(REPOSITORY_URL);
    for record in records {
      contents.push('\n');
      contents.push_str(record.group_id);
      contents.push(':');
      contents.push_str(&record.artifact_id);
    }
    PlanId::from_contents(contents.as_bytes())
  }
}
