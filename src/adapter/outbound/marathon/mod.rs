//! Marathon orchestrator adapter.

pub mod client;
pub mod dto;

pub use client::MarathonClient;
