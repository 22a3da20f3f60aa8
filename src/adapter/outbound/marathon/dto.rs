//! Marathon REST API wire types.

use serde::Deserialize;

use crate::domain::DeploymentHandle;

/// Body of `GET /v2/apps/{id}/versions`.
#[derive(Debug, Default, Deserialize)]
pub struct VersionList {
    #[serde(default)]
    pub versions: Vec<String>,
}

/// Body returned by app update and restart.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRef {
    #[serde(default)]
    pub deployment_id: String,
    #[serde(default)]
    pub version: String,
}

impl From<DeploymentRef> for DeploymentHandle {
    fn from(r: DeploymentRef) -> Self {
        Self {
            deployment_id: r.deployment_id,
            version: r.version,
        }
    }
}

/// One entry of `GET /v2/deployments`. Only the id is needed.
#[derive(Debug, Deserialize)]
pub struct ActiveDeployment {
    pub id: String,
}
