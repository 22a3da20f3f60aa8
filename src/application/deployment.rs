//! Deployment lifecycle driver.
//!
//! Submits an application update, waits for the resulting deployment to leave
//! the orchestrator's active set, and decides which version the rollout
//! produced. A deployment that outlives its timeout is cancelled.
//!
//! ```text
//! Submitting ─▶ Polling ─┬─▶ TimedOut ─▶ DeleteDeployment ─▶ error
//!                        └─▶ Succeeded ─▶ VersionCheck ─┬─▶ done
//!                                                       └─▶ Restarting ─▶ Polling ─▶ …
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::domain::{same_version, AppDescriptor};
use crate::error::DeployError;
use crate::port::outbound::orchestrator::Orchestrator;

/// Pause between two deployment checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Inputs of an `out` run.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    /// Rendered application descriptor (JSON).
    pub descriptor: Vec<u8>,
    /// How long each deployment may stay active before it is cancelled.
    pub timeout: Duration,
    /// Restart the application when the update did not create a new version.
    pub restart_if_no_update: bool,
}

/// Drives one check, fetch or deploy against an [`Orchestrator`].
pub struct DeploymentDriver {
    orchestrator: Arc<dyn Orchestrator>,
}

impl DeploymentDriver {
    pub fn new(orchestrator: Arc<dyn Orchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Deploy the descriptor and return the version now running.
    ///
    /// # Errors
    ///
    /// Any failing step aborts the run; see [`DeployError`] for the kinds.
    /// A deployment that times out is cancelled and reported as
    /// [`DeployError::DeploymentTimedOut`] (or [`DeployError::CleanupFailed`]
    /// if cancelling fails too).
    pub async fn deploy(&self, request: DeployRequest) -> Result<String, DeployError> {
        let app = AppDescriptor::from_slice(&request.descriptor)
            .map_err(DeployError::MalformedDescriptor)?;

        let update = self
            .orchestrator
            .update_app(&app)
            .await
            .map_err(DeployError::UpdateFailed)?;
        info!(
            app_id = %app.id,
            deployment_id = %update.deployment_id,
            version = %update.version,
            "Submitted app update"
        );

        self.await_deployment(&update.deployment_id, request.timeout)
            .await?;

        let versions = self
            .orchestrator
            .latest_versions(&app.id, "")
            .await
            .map_err(|source| DeployError::VersionsFailed {
                app_id: app.id.clone(),
                source,
            })?;
        let latest = versions.last().ok_or_else(|| DeployError::NoVersions {
            app_id: app.id.clone(),
        })?;

        if same_version(latest, &update.version) {
            info!(app_id = %app.id, version = %update.version, "Deployment produced a new version");
            return Ok(update.version);
        }

        if !request.restart_if_no_update {
            info!(
                app_id = %app.id,
                version = %latest,
                "Update did not create a new version"
            );
            return Ok(latest.clone());
        }

        info!(app_id = %app.id, version = %latest, "No new version, restarting app");
        let restart = self
            .orchestrator
            .restart_app(&app.id)
            .await
            .map_err(|source| DeployError::RestartFailed {
                app_id: app.id.clone(),
                source,
            })?;

        self.await_deployment(&restart.deployment_id, request.timeout)
            .await?;

        info!(app_id = %app.id, version = %restart.version, "Restart completed");
        Ok(restart.version)
    }

    /// Version identifier of `app_id` at `version`.
    ///
    /// # Errors
    ///
    /// Client errors propagate unchanged; an app without a version field is
    /// [`DeployError::MissingVersion`].
    pub async fn fetch(&self, app_id: &str, version: &str) -> crate::error::Result<String> {
        let app = self.orchestrator.get_app(app_id, version).await?;
        let version = app.version.ok_or_else(|| DeployError::MissingVersion {
            app_id: app_id.to_string(),
        })?;
        Ok(version)
    }

    /// Versions of `app_id` at or after `reference`, oldest first.
    ///
    /// # Errors
    ///
    /// Client and resolver errors propagate unchanged.
    pub async fn check(&self, app_id: &str, reference: &str) -> crate::error::Result<Vec<String>> {
        let versions = self.orchestrator.latest_versions(app_id, reference).await?;
        debug!(app_id = %app_id, count = versions.len(), "Resolved versions");
        Ok(versions)
    }

    /// Poll until the deployment is no longer active.
    ///
    /// Each round checks first and only then looks at the deadline, so a
    /// zero timeout still performs exactly one check. On timeout the
    /// deployment is deleted. A timeout too large to represent never expires.
    async fn await_deployment(&self, deployment_id: &str, timeout: Duration) -> Result<(), DeployError> {
        let deadline = Instant::now().checked_add(timeout);
        debug!(deployment_id = %deployment_id, timeout_secs = timeout.as_secs(), "Waiting for deployment");

        loop {
            let active = self
                .orchestrator
                .check_deployment(deployment_id)
                .await
                .map_err(|source| DeployError::CheckFailed {
                    deployment_id: deployment_id.to_string(),
                    source,
                })?;

            if !active {
                debug!(deployment_id = %deployment_id, "Deployment finished");
                return Ok(());
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                break;
            }
            sleep(POLL_INTERVAL).await;
        }

        warn!(
            deployment_id = %deployment_id,
            timeout_secs = timeout.as_secs(),
            "Deployment timed out, cancelling"
        );
        self.orchestrator
            .delete_deployment(deployment_id)
            .await
            .map_err(|source| DeployError::CleanupFailed {
                deployment_id: deployment_id.to_string(),
                timed_out: true,
                source,
            })?;

        Err(DeployError::DeploymentTimedOut {
            deployment_id: deployment_id.to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }
}
