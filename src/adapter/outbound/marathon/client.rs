//! Marathon REST API client.
//!
//! Every operation funnels through [`MarathonClient::handle_request`], which
//! resolves the path against the configured base URL, attaches credentials,
//! and rejects any status outside the operation's accepted set. Decoding is
//! a separate step so that operations without a payload skip it entirely.

use std::sync::Arc;

use async_trait::async_trait;
use base64::prelude::*;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use super::dto::{ActiveDeployment, DeploymentRef, VersionList};
use crate::domain::{newer_or_equal, AppDescriptor, DeploymentHandle};
use crate::error::ClientError;
use crate::port::outbound::orchestrator::Orchestrator;
use crate::port::outbound::transport::{BasicAuth, HttpRequest, HttpTransport};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Parameters of a single API call.
struct ApiRequest<'a> {
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
    accept: &'a [StatusCode],
}

impl<'a> ApiRequest<'a> {
    fn new(method: Method, path: impl Into<String>, accept: &'a [StatusCode]) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            accept,
        }
    }

    fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Client for the Marathon `/v2` API.
pub struct MarathonClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    basic_auth: Option<BasicAuth>,
    api_token: Option<String>,
}

impl MarathonClient {
    /// Create a client that sends requests relative to `base_url`.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
            basic_auth: None,
            api_token: None,
        }
    }

    #[must_use]
    pub fn with_basic_auth(mut self, auth: Option<BasicAuth>) -> Self {
        self.basic_auth = auth;
        self
    }

    /// Send `Authorization: token=<token>` on every request.
    #[must_use]
    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token.filter(|t| !t.is_empty());
        self
    }

    async fn handle_request(&self, request: ApiRequest<'_>) -> Result<Option<Vec<u8>>, ClientError> {
        let url = join_path(&self.base_url, &request.path)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if let Some(auth) = &self.basic_auth {
            let encoded = BASE64_STANDARD.encode(format!("{}:{}", auth.user_name, auth.password));
            headers.insert(AUTHORIZATION, authorization(format!("Basic {encoded}"))?);
        }
        // The token replaces basic credentials when both are configured.
        if let Some(token) = &self.api_token {
            headers.insert(AUTHORIZATION, authorization(format!("token={token}"))?);
        }

        info!(method = %request.method, url = %url, "Sending HTTP API request to Marathon");

        let response = self
            .transport
            .execute(HttpRequest {
                method: request.method,
                url,
                headers,
                body: request.body,
            })
            .await?;

        if !request.accept.contains(&response.status) {
            return Err(ClientError::UnexpectedStatus {
                got: response.status.as_u16(),
                wanted: request.accept.iter().map(StatusCode::as_u16).collect(),
            });
        }

        debug!(status = %response.status, "Marathon request accepted");
        Ok(response.body)
    }
}

fn authorization(value: String) -> Result<HeaderValue, ClientError> {
    let mut value = HeaderValue::from_str(&value)
        .map_err(|_| ClientError::InvalidHeader { name: "authorization" })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Decode the first JSON value of a body.
///
/// An absent or blank body leaves the target at its default.
fn decode<T>(body: Option<Vec<u8>>) -> Result<T, ClientError>
where
    T: DeserializeOwned + Default,
{
    let Some(bytes) = body else {
        return Ok(T::default());
    };

    match serde_json::Deserializer::from_slice(&bytes)
        .into_iter::<T>()
        .next()
    {
        Some(Ok(value)) => Ok(value),
        Some(Err(err)) => Err(ClientError::Decode(err)),
        None => Ok(T::default()),
    }
}

/// Join `relative` onto the path of `base` the way a filesystem path join
/// would: duplicate and trailing slashes collapse and `.`/`..` resolve.
fn join_path(base: &Url, relative: &str) -> Result<Url, ClientError> {
    if base.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl {
            path: relative.to_string(),
        });
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.path().split('/').chain(relative.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut url = base.clone();
    url.set_path(&format!("/{}", segments.join("/")));
    Ok(url)
}

#[async_trait]
impl Orchestrator for MarathonClient {
    async fn latest_versions(
        &self,
        app_id: &str,
        reference: &str,
    ) -> Result<Vec<String>, ClientError> {
        let body = self
            .handle_request(ApiRequest::new(
                Method::GET,
                format!("/v2/apps/{app_id}/versions"),
                &[StatusCode::OK],
            ))
            .await?;

        let list: VersionList = decode(body)?;
        if list.versions.is_empty() {
            return Ok(Vec::new());
        }
        Ok(newer_or_equal(&list.versions, reference)?)
    }

    async fn get_app(&self, app_id: &str, version: &str) -> Result<AppDescriptor, ClientError> {
        let body = self
            .handle_request(ApiRequest::new(
                Method::GET,
                format!("/v2/apps/{app_id}/versions/{version}"),
                &[StatusCode::OK],
            ))
            .await?;
        decode(body)
    }

    async fn update_app(&self, app: &AppDescriptor) -> Result<DeploymentHandle, ClientError> {
        let payload = serde_json::to_vec(app).map_err(ClientError::Encode)?;
        let body = self
            .handle_request(
                ApiRequest::new(
                    Method::PUT,
                    format!("/v2/apps/{}", app.id),
                    &[StatusCode::OK, StatusCode::CREATED],
                )
                .with_body(payload),
            )
            .await?;
        Ok(decode::<DeploymentRef>(body)?.into())
    }

    async fn restart_app(&self, app_id: &str) -> Result<DeploymentHandle, ClientError> {
        let body = self
            .handle_request(ApiRequest::new(
                Method::POST,
                format!("/v2/apps/{app_id}/restart"),
                &[StatusCode::OK],
            ))
            .await?;
        Ok(decode::<DeploymentRef>(body)?.into())
    }

    async fn check_deployment(&self, deployment_id: &str) -> Result<bool, ClientError> {
        let body = self
            .handle_request(ApiRequest::new(
                Method::GET,
                "/v2/deployments",
                &[StatusCode::OK],
            ))
            .await?;
        let active: Vec<ActiveDeployment> = decode(body)?;
        Ok(active.iter().any(|d| d.id == deployment_id))
    }

    async fn delete_deployment(&self, deployment_id: &str) -> Result<(), ClientError> {
        self.handle_request(ApiRequest::new(
            Method::DELETE,
            format!("/v2/deployments/{deployment_id}"),
            &[StatusCode::OK],
        ))
        .await?;
        Ok(())
    }
}
