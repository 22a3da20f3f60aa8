//! Mock [`Orchestrator`] for driver tests.
//!
//! [`ScriptedOrchestrator`] pops the next queued result for each operation
//! and records every call, so tests can assert both outcomes and the exact
//! sequence of remote operations.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{AppDescriptor, DeploymentHandle};
use crate::error::ClientError;
use crate::port::outbound::orchestrator::Orchestrator;

/// A recorded orchestrator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LatestVersions { app_id: String, reference: String },
    GetApp { app_id: String, version: String },
    UpdateApp { app_id: String },
    RestartApp { app_id: String },
    CheckDeployment { deployment_id: String },
    DeleteDeployment { deployment_id: String },
}

#[derive(Default)]
struct Script {
    versions: VecDeque<Result<Vec<String>, ClientError>>,
    apps: VecDeque<Result<AppDescriptor, ClientError>>,
    updates: VecDeque<Result<DeploymentHandle, ClientError>>,
    restarts: VecDeque<Result<DeploymentHandle, ClientError>>,
    checks: VecDeque<Result<bool, ClientError>>,
    deletes: VecDeque<Result<(), ClientError>>,
    /// Answer for `check_deployment` once `checks` runs dry.
    check_fallback: bool,
    calls: Vec<Call>,
}

/// An orchestrator with scripted results.
///
/// Exhausted queues behave as follows: `check_deployment` returns the
/// fallback (inactive unless [`always_active`](Self::always_active) was
/// called), `delete_deployment` succeeds, everything else fails with a
/// transport error naming the operation.
#[derive(Default)]
pub struct ScriptedOrchestrator {
    script: Mutex<Script>,
}

/// A transport-level failure for scripting error paths.
pub fn failure(message: &str) -> ClientError {
    ClientError::Transport(message.to_string().into())
}

fn unscripted(operation: &str) -> ClientError {
    failure(&format!("unscripted call to {operation}"))
}

impl ScriptedOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(self, result: Result<Vec<String>, ClientError>) -> Self {
        self.script.lock().versions.push_back(result);
        self
    }

    pub fn with_app(self, result: Result<AppDescriptor, ClientError>) -> Self {
        self.script.lock().apps.push_back(result);
        self
    }

    pub fn with_update(self, result: Result<DeploymentHandle, ClientError>) -> Self {
        self.script.lock().updates.push_back(result);
        self
    }

    pub fn with_restart(self, result: Result<DeploymentHandle, ClientError>) -> Self {
        self.script.lock().restarts.push_back(result);
        self
    }

    pub fn with_check(self, result: Result<bool, ClientError>) -> Self {
        self.script.lock().checks.push_back(result);
        self
    }

    pub fn with_delete(self, result: Result<(), ClientError>) -> Self {
        self.script.lock().deletes.push_back(result);
        self
    }

    /// Report every deployment as active once scripted checks run out.
    pub fn always_active(self) -> Self {
        self.script.lock().check_fallback = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().calls.clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.script.lock().calls.iter().filter(|c| matches(c)).count()
    }

    pub fn check_count(&self) -> usize {
        self.count(|c| matches!(c, Call::CheckDeployment { .. }))
    }

    pub fn delete_count(&self) -> usize {
        self.count(|c| matches!(c, Call::DeleteDeployment { .. }))
    }

    pub fn restart_count(&self) -> usize {
        self.count(|c| matches!(c, Call::RestartApp { .. }))
    }
}

#[async_trait]
impl Orchestrator for ScriptedOrchestrator {
    async fn latest_versions(
        &self,
        app_id: &str,
        reference: &str,
    ) -> Result<Vec<String>, ClientError> {
        let mut script = self.script.lock();
        script.calls.push(Call::LatestVersions {
            app_id: app_id.to_string(),
            reference: reference.to_string(),
        });
        script
            .versions
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("latest_versions")))
    }

    async fn get_app(&self, app_id: &str, version: &str) -> Result<AppDescriptor, ClientError> {
        let mut script = self.script.lock();
        script.calls.push(Call::GetApp {
            app_id: app_id.to_string(),
            version: version.to_string(),
        });
        script
            .apps
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("get_app")))
    }

    async fn update_app(&self, app: &AppDescriptor) -> Result<DeploymentHandle, ClientError> {
        let mut script = self.script.lock();
        script.calls.push(Call::UpdateApp {
            app_id: app.id.clone(),
        });
        script
            .updates
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("update_app")))
    }

    async fn restart_app(&self, app_id: &str) -> Result<DeploymentHandle, ClientError> {
        let mut script = self.script.lock();
        script.calls.push(Call::RestartApp {
            app_id: app_id.to_string(),
        });
        script
            .restarts
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("restart_app")))
    }

    async fn check_deployment(&self, deployment_id: &str) -> Result<bool, ClientError> {
        let mut script = self.script.lock();
        script.calls.push(Call::CheckDeployment {
            deployment_id: deployment_id.to_string(),
        });
        let fallback = script.check_fallback;
        script.checks.pop_front().unwrap_or(Ok(fallback))
    }

    async fn delete_deployment(&self, deployment_id: &str) -> Result<(), ClientError> {
        let mut script = self.script.lock();
        script.calls.push(Call::DeleteDeployment {
            deployment_id: deployment_id.to_string(),
        });
        script.deletes.pop_front().unwrap_or(Ok(()))
    }
}
