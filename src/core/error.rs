//! Error types for apktool-forge with contextual messages and exit codes
//!
//! Only configuration and I/O problems are fatal here. Version-control
//! queries deliberately never produce a `ForgeError`: their failures degrade
//! to absent values inside the vcs module.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for apktool-forge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (I/O, subprocess)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for apktool-forge
#[derive(Debug)]
pub enum ForgeError {
  /// Configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ForgeError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ForgeError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ForgeError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ForgeError::Message { message, context, help } => ForgeError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ForgeError::Config(_) => ExitCode::User,
      ForgeError::Io(_) => ExitCode::System,
      ForgeError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ForgeError::Config(e) => e.help_message(),
      ForgeError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ForgeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ForgeError::Config(e) => write!(f, "{}", e),
      ForgeError::Io(e) => write!(f, "I/O error: {}", e),
      ForgeError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ForgeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ForgeError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ForgeError {
  fn from(err: io::Error) -> Self {
    ForgeError::Io(err)
  }
}

impl From<String> for ForgeError {
  fn from(msg: String) -> Self {
    ForgeError::message(msg)
  }
}

impl From<&str> for ForgeError {
  fn from(msg: &str) -> Self {
    ForgeError::message(msg)
  }
}

impl From<toml_edit::TomlError> for ForgeError {
  fn from(err: toml_edit::TomlError) -> Self {
    ForgeError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for ForgeError {
  fn from(err: toml_edit::de::Error) -> Self {
    ForgeError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<toml_edit::ser::Error> for ForgeError {
  fn from(err: toml_edit::ser::Error) -> Self {
    ForgeError::message(format!("TOML serialization error: {}", err))
  }
}

impl From<serde_json::Error> for ForgeError {
  fn from(err: serde_json::Error) -> Self {
    ForgeError::message(format!("JSON error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for ForgeError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    ForgeError::message(format!("UTF-8 conversion error: {}", err))
  }
}

/// Convert anyhow::Error to ForgeError (for transition period)
impl From<anyhow::Error> for ForgeError {
  fn from(err: anyhow::Error) -> Self {
    ForgeError::message(err.to_string())
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// forge.toml not found
  NotFound { workspace_root: PathBuf },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some("Run `apktool-forge init` to create a configuration file.".to_string()),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { workspace_root } => {
        write!(
          f,
          "No apktool-forge configuration found.\nExpected file: {}/forge.toml",
          workspace_root.display()
        )
      }
    }
  }
}

/// Result type alias for apktool-forge
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ForgeResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ForgeResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ForgeError>,
{
  fn context(self, ctx: impl Into<String>) -> ForgeResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ForgeResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ForgeError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
