use thiserror::Error;

/// Version resolution errors.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("malformed timestamp '{value}': {source}")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("version not found: no version at or after {reference}")]
    ReferenceNotFound { reference: String },
}

/// Errors raised while talking to the orchestrator API.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid request URL for path {path}")]
    InvalidUrl { path: String },

    #[error("invalid value for header {name}")]
    InvalidHeader { name: &'static str },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("expected one of {wanted:?} response codes but got {got}")]
    UnexpectedStatus { got: u16, wanted: Vec<u16> },

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Deployment lifecycle errors with structured variants.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("malformed application descriptor: {0}")]
    MalformedDescriptor(#[source] serde_json::Error),

    #[error("failed to update app: {0}")]
    UpdateFailed(#[source] ClientError),

    #[error("failed to check deployment {deployment_id}: {source}")]
    CheckFailed {
        deployment_id: String,
        #[source]
        source: ClientError,
    },

    #[error("deployment {deployment_id} did not finish within {timeout_secs}s and was cancelled")]
    DeploymentTimedOut {
        deployment_id: String,
        timeout_secs: u64,
    },

    #[error("failed to cancel deployment {deployment_id} (timed out: {timed_out}): {source}")]
    CleanupFailed {
        deployment_id: String,
        timed_out: bool,
        #[source]
        source: ClientError,
    },

    #[error("failed to restart app {app_id}: {source}")]
    RestartFailed {
        app_id: String,
        #[source]
        source: ClientError,
    },

    #[error("failed to read versions of app {app_id}: {source}")]
    VersionsFailed {
        app_id: String,
        #[source]
        source: ClientError,
    },

    #[error("orchestrator reported no versions for app {app_id}")]
    NoVersions { app_id: String },

    #[error("app {app_id} has no version field")]
    MissingVersion { app_id: String },
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Descriptor template rendering errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error replacing {name} from replacement_files: {source}")]
    ReplacementFile {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render template: {0}")]
    Render(#[source] handlebars::RenderError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable, machine-readable name of the failure.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config",
            Error::Template(_) => "template",
            Error::Client(e) => e.kind(),
            Error::Deploy(e) => e.kind(),
            Error::Json(_) => "json",
            Error::Io(_) => "io",
        }
    }
}

impl VersionError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            VersionError::MalformedTimestamp { .. } => "malformed_timestamp",
            VersionError::ReferenceNotFound { .. } => "reference_not_found",
        }
    }
}

impl ClientError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::InvalidUrl { .. } => "invalid_url",
            ClientError::InvalidHeader { .. } => "invalid_header",
            ClientError::Encode(_) => "encode_error",
            ClientError::Transport(_) => "transport_error",
            ClientError::UnexpectedStatus { .. } => "unexpected_status",
            ClientError::Decode(_) => "decode_error",
            ClientError::Version(e) => e.kind(),
        }
    }
}

impl DeployError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            DeployError::MalformedDescriptor(_) => "malformed_descriptor",
            DeployError::UpdateFailed(_) => "update_failed",
            DeployError::CheckFailed { .. } => "check_failed",
            DeployError::DeploymentTimedOut { .. } => "deployment_timed_out",
            DeployError::CleanupFailed { .. } => "cleanup_failed",
            DeployError::RestartFailed { .. } => "restart_failed",
            DeployError::VersionsFailed { .. } => "versions_failed",
            DeployError::NoVersions { .. } => "no_versions",
            DeployError::MissingVersion { .. } => "missing_version",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_lists_wanted_codes() {
        let err = ClientError::UnexpectedStatus {
            got: 409,
            wanted: vec![200, 201],
        };
        assert_eq!(
            err.to_string(),
            "expected one of [200, 201] response codes but got 409"
        );
    }

    #[test]
    fn kind_passes_through_wrappers() {
        let err: Error = ClientError::from(VersionError::ReferenceNotFound {
            reference: "x".into(),
        })
        .into();
        assert_eq!(err.kind(), "reference_not_found");

        let err: Error = DeployError::NoVersions { app_id: "/a".into() }.into();
        assert_eq!(err.kind(), "no_versions");
    }

    #[test]
    fn cleanup_failure_keeps_cause() {
        use std::error::Error as _;

        let err = DeployError::CleanupFailed {
            deployment_id: "d1".into(),
            timed_out: true,
            source: ClientError::UnexpectedStatus {
                got: 500,
                wanted: vec![200],
            },
        };
        assert_eq!(err.kind(), "cleanup_failed");
        assert!(err.source().is_some());
        assert!(err.to_string().contains("timed out: true"));
    }
}
