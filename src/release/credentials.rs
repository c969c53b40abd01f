//! Repository credential resolution
//!
//! Precedence per field: environment variable first, forge.toml local
//! property second, absent when neither is set. Resolution itself never
//! fails; a missing credential only surfaces later, when the external
//! publish step actually authenticates.
//!
//! Credentials must never reach logs or machine output. Both `Debug` and
//! `Serialize` are implemented by hand to redact set values.

use crate::core::config::CredentialConfig;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Environment variable carrying the repository actor/identity
pub const ENV_ACTOR: &str = "GITHUB_ACTOR";

/// Environment variable carrying the repository token/secret
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";

/// Resolved repository credentials, shared read-only by every publication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  username: Option<String>,
  token: Option<String>,
}

impl Credentials {
  pub fn username(&self) -> Option<&str> {
    self.username.as_deref()
  }

  pub fn token(&self) -> Option<&str> {
    self.token.as_deref()
  }

  /// True when both fields resolved to a value
  pub fn is_complete(&self) -> bool {
    self.username.is_some() && self.token.is_some()
  }
}

// Redacting Debug: presence only, never the values
impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &redact(&self.username))
      .field("token", &redact(&self.token))
      .finish()
  }
}

// Redacting Serialize: JSON output carries presence markers only
impl Serialize for Credentials {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Credentials", 2)?;
    state.serialize_field("username", &redact(&self.username))?;
    state.serialize_field("token", &redact(&self.token))?;
    state.end()
  }
}

fn redact(field: &Option<String>) -> &'static str {
  match field {
    Some(_) => "<set>",
    None => "<absent>",
  }
}

/// Resolve credentials from the environment with config fallback
///
/// Empty environment values count as unset, so a blank `GITHUB_ACTOR` in CI
/// does not shadow a configured `gpr_user`.
pub fn resolve(config: &CredentialConfig) -> Credentials {
  resolve_with(env_var(ENV_ACTOR), env_var(ENV_TOKEN), config)
}

/// Pure resolution core, separated for tests
pub fn resolve_with(env_actor: Option<String>, env_token: Option<String>, config: &CredentialConfig) -> Credentials {
  Credentials {
    username: env_actor.or_else(|| config.gpr_user.clone()),
    token: env_token.or_else(|| config.gpr_key.clone()),
  }
}

fn env_var(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|v| !v.is_empty())
}
