//! CLI commands for apktool-forge
//!
//! - **init**: scaffold forge.toml for a project
//! - **version**: resolve and print the canonical build version
//! - **modules**: list configured modules with publishable classification
//! - **plan**: assemble the full publishing configuration for an invocation

pub mod init;
pub mod modules;
pub mod plan;
pub mod version;

pub use init::run_init;
pub use modules::run_modules;
pub use plan::run_plan;
pub use version::run_version;
