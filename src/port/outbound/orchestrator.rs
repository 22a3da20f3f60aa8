//! Orchestrator port.
//!
//! The six remote operations the deployment driver relies on. The production
//! implementation is [`MarathonClient`](crate::adapter::outbound::marathon::MarathonClient);
//! tests substitute a scripted one.

use async_trait::async_trait;

use crate::domain::{AppDescriptor, DeploymentHandle};
use crate::error::ClientError;

#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Versions of `app_id` at or after `reference`, oldest first.
    ///
    /// An empty `reference` selects every version. An application with no
    /// versions at all yields an empty list rather than an error.
    async fn latest_versions(
        &self,
        app_id: &str,
        reference: &str,
    ) -> Result<Vec<String>, ClientError>;

    /// The application as it was at `version`.
    async fn get_app(&self, app_id: &str, version: &str) -> Result<AppDescriptor, ClientError>;

    /// Submit a new desired state, starting a deployment.
    async fn update_app(&self, app: &AppDescriptor) -> Result<DeploymentHandle, ClientError>;

    /// Restart every instance of the application, starting a deployment.
    async fn restart_app(&self, app_id: &str) -> Result<DeploymentHandle, ClientError>;

    /// Whether the deployment is still in the active set.
    ///
    /// `false` covers both "finished" and "never existed".
    async fn check_deployment(&self, deployment_id: &str) -> Result<bool, ClientError>;

    /// Cancel an active deployment.
    async fn delete_deployment(&self, deployment_id: &str) -> Result<(), ClientError>;
}
