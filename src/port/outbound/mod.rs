//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the infrastructure the deployment driver depends
//! on: the orchestrator API and the HTTP transport underneath it.

pub mod orchestrator;
pub mod transport;
