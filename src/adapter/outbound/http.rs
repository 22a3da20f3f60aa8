//! `reqwest`-backed HTTP transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use crate::error::ClientError;
use crate::port::outbound::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Sends requests with a shared [`reqwest::Client`]. Never retries.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: HttpClient,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: HttpClient::new(),
        }
    }

    /// Build a transport whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the builder error if the HTTP client cannot be constructed.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| ClientError::Transport(Box::new(err)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ClientError::Transport(Box::new(err)))?;

        debug!(status = %status, bytes = bytes.len(), "Received HTTP response");

        let body = if bytes.is_empty() {
            None
        } else {
            Some(bytes.to_vec())
        };
        Ok(HttpResponse::new(status, body))
    }
}
