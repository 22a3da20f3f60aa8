//! Marathon resource - deploy applications to Marathon from Concourse.
//!
//! The binary implements the three Concourse resource commands:
//!
//! - `check` lists application versions at or after the last seen one
//! - `in` confirms a version exists and echoes it back
//! - `out` renders a descriptor template, deploys it and waits for the rollout
//!
//! # Modules
//!
//! - [`domain`] - Version timestamps and application descriptors
//! - [`port`] - Orchestrator and HTTP transport traits
//! - [`adapter`] - Marathon REST client, reqwest transport, CLI handlers
//! - [`application`] - Deployment driver and descriptor templating
//! - [`infrastructure`] - Source configuration, logging, wiring
//! - [`error`] - Error types for the crate

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
