//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!   ┌──────────────┐     ┌────────────────────┐     ┌──────────────────┐
//!   │ CLI envelope │ ──▶ │ DeploymentDriver   │ ──▶ │ Orchestrator     │
//!   └──────────────┘     └────────────────────┘     │ (MarathonClient) │
//!                                                   └────────┬─────────┘
//!                                                            ▼
//!                                                   ┌──────────────────┐
//!                                                   │ HttpTransport    │
//!                                                   │ (reqwest)        │
//!                                                   └──────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Orchestrator`] - Application and deployment operations
//! - [`HttpTransport`] - Executes a single HTTP request

pub mod outbound;

pub use outbound::orchestrator::Orchestrator;
pub use outbound::transport::{BasicAuth, HttpRequest, HttpResponse, HttpTransport};
