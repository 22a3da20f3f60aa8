//! Orchestrator-agnostic types: application descriptors, deployment handles
//! and timestamp-named versions.

pub mod app;
pub mod version;

pub use app::{AppDescriptor, DeploymentHandle};
pub use version::{newer_or_equal, same_version, VersionTimestamp};
