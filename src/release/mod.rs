//! Version resolution and publishing orchestration
//!
//! # Core Invariants
//!
//! 1. **One VersionInfo per invocation**
//!    - Resolved once, immutable afterwards
//!    - Deterministic for a fixed git state and action set
//!
//! 2. **Publication configuration has a single source of truth**
//!    - Every record carries the same resolved version
//!    - Project metadata and credentials are held once per plan
//!
//! 3. **The publishable set is closed**
//!    - Fixed allow-list, unknown modules fail closed
//!    - Non-published modules get no credentials and no signing obligation
//!
//! # Architecture
//!
//! - **version**: build-mode classification and version resolution
//! - **modules**: allow-list selection of publishable subprojects
//! - **credentials**: env-over-config credential resolution, redacted output
//! - **publish**: per-module publication records rolled into a PublishPlan

pub mod credentials;
pub mod modules;
pub mod publish;
pub mod version;

pub use credentials::Credentials;
pub use modules::{ModuleDescriptor, ModuleSelector};
pub use publish::{PublicationRecord, PublishPlan};
pub use version::{BuildMode, VersionInfo};
