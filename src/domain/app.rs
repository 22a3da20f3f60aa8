//! Application descriptors and deployment handles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of one application.
///
/// Only the fields the driver reads are typed; everything else is carried
/// through untouched so that the orchestrator sees the document as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl AppDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Decode a rendered descriptor document.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the bytes are not a descriptor object with
    /// an `id`.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// An in-flight rollout started by an update or restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentHandle {
    pub deployment_id: String,
    /// Version the application will have once the rollout completes.
    pub version: String,
}

impl DeploymentHandle {
    #[must_use]
    pub fn new(deployment_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            version: version.into(),
        }
    }
}
