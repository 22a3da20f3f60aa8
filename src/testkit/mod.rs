//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`orchestrator`] - `ScriptedOrchestrator`, a mock
//!   [`Orchestrator`](crate::port::Orchestrator) with queued results.
//! - [`transport`] - `ScriptedTransport`, a mock
//!   [`HttpTransport`](crate::port::HttpTransport) that records requests.

pub mod orchestrator;
pub mod transport;
