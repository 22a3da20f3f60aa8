//! HTTP transport port.
//!
//! The narrowest capability the orchestrator client needs: execute one
//! request and hand back the status and body. Implementations do not retry.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::error::ClientError;

/// Credentials for HTTP basic authentication.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct BasicAuth {
    pub user_name: String,
    pub password: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A fully-built request, ready to send. Credentials are already in
/// `headers`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    /// `None` when the response carried no body at all.
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: Option<Vec<u8>>) -> Self {
        Self { status, body }
    }

    /// Response with a JSON (or any textual) body.
    #[must_use]
    pub fn with_body(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new(status, Some(body.into().into_bytes()))
    }

    #[must_use]
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, None)
    }
}

/// Port for executing HTTP requests.
///
/// # Errors
///
/// Connection, DNS, timeout and body-read failures surface as
/// [`ClientError::Transport`]. A non-success status is *not* an error at this
/// layer.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}
