//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::http::ReqwestTransport;
use crate::adapter::outbound::marathon::MarathonClient;
use crate::application::deployment::DeploymentDriver;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::source::{ClientSettings, SourceConfig};
use crate::port::outbound::orchestrator::Orchestrator;
use crate::port::outbound::transport::HttpTransport;

/// Build the Marathon client described by validated settings.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for `http_timeout_secs` if an HTTP
/// client with that timeout cannot be built.
pub fn build_client(settings: &ClientSettings) -> std::result::Result<MarathonClient, ConfigError> {
    let transport: Arc<dyn HttpTransport> = match settings.request_timeout {
        Some(timeout) => Arc::new(ReqwestTransport::with_timeout(timeout).map_err(|e| {
            ConfigError::InvalidValue {
                field: "http_timeout_secs",
                reason: e.to_string(),
            }
        })?),
        None => Arc::new(ReqwestTransport::new()),
    };

    debug!(
        base_url = %settings.base_url,
        basic_auth = settings.basic_auth.is_some(),
        api_token = settings.api_token.is_some(),
        "Building Marathon client"
    );

    Ok(MarathonClient::new(transport, settings.base_url.clone())
        .with_basic_auth(settings.basic_auth.clone())
        .with_api_token(settings.api_token.clone()))
}

/// Validate `source` and wire a driver around a real Marathon client.
///
/// # Errors
///
/// Returns a configuration error if the source is invalid.
pub fn build_driver(source: &SourceConfig) -> Result<DeploymentDriver> {
    let settings = source.client_settings()?;
    let orchestrator: Arc<dyn Orchestrator> = Arc::new(build_client(&settings)?);
    Ok(DeploymentDriver::new(orchestrator))
}
