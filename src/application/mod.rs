//! Application services: the deployment driver and descriptor templating.

pub mod deployment;
pub mod template;

pub use deployment::{DeployRequest, DeploymentDriver, POLL_INTERVAL};
pub use template::{Replacement, TemplateRenderer};
