//! Core building blocks for apktool-forge
//!
//! - **config**: forge.toml parsing and validation
//! - **error**: error types with contextual help messages and exit codes
//! - **vcs**: fail-soft git queries (SystemGit)

pub mod config;
pub mod error;
pub mod vcs;
