//! Resource `source` configuration.
//!
//! Concourse hands the same `source` object to every command. It names the
//! Marathon endpoint, the application, and optional credentials.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;
use crate::port::outbound::transport::BasicAuth;

/// The `source` block as configured in the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the Marathon API.
    #[serde(default)]
    pub uri: String,

    /// Marathon application id, e.g. `/web/api`.
    #[serde(default)]
    pub app_id: String,

    #[serde(default)]
    pub basic_auth: Option<BasicAuth>,

    /// Sent as `Authorization: token=<api_token>`.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Per-request timeout. No timeout when unset.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,
}

/// Validated client settings derived from a [`SourceConfig`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub basic_auth: Option<BasicAuth>,
    pub api_token: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl SourceConfig {
    /// Validate the connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `uri` is missing or not an absolute
    /// http(s) URL, or when `http_timeout_secs` is zero.
    pub fn client_settings(&self) -> Result<ClientSettings, ConfigError> {
        if self.uri.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "uri" });
        }

        let base_url = Url::parse(self.uri.trim()).map_err(|e| ConfigError::InvalidValue {
            field: "uri",
            reason: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "uri",
                reason: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }

        let request_timeout = match self.http_timeout_secs {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    field: "http_timeout_secs",
                    reason: "must be greater than 0".into(),
                })
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(ClientSettings {
            base_url,
            basic_auth: self.basic_auth.clone(),
            api_token: self.api_token.clone().filter(|t| !t.is_empty()),
            request_timeout,
        })
    }

    /// The configured application id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `app_id` is empty.
    pub fn app_id(&self) -> Result<&str, ConfigError> {
        if self.app_id.is_empty() {
            return Err(ConfigError::MissingField { field: "app_id" });
        }
        Ok(&self.app_id)
    }
}
