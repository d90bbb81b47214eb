//! Shared HTTP plumbing for the remote clients.
//!
//! Builds requests against the configured server, attaches the bearer token
//! when one is given, and turns status codes and envelopes into
//! [`ClientError`]s.

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::egui_app::config::Config;
use crate::shared::{ApiResponse, ClientError};

/// HTTP client shared by the group, geocoding and post clients
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: Config,
    client: Client,
}

impl HttpClient {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start a request to `path` on the configured server
    pub fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = self.config.api_url(path);
        tracing::debug!("{} {}", method, url);

        let request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send and decode an enveloped JSON body
    pub async fn send_envelope<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = ensure_success(request.send().await?).await?;
        let body = response.bytes().await?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
        envelope.into_data()
    }

    /// Send a request whose only contract is a 2xx status
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        ensure_success(request.send().await?).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| status.to_string());
    tracing::debug!("Request rejected: {} - {}", status, error_text);
    Err(ClientError::from_status(status.as_u16(), error_text))
}
