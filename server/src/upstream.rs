//! Executes the requests built by `thumbnails-core` against the network.

use std::time::Duration;

use thumbnails_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

/// Thin wrapper over a shared `reqwest::Client`. Every call is bounded by
/// the timeout given at construction.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Perform the round-trip. Any final status is returned as data; only
    /// transport failures (connect, timeout, body read) are errors here.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), "calling upstream search");
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.without_url().to_string()))?;

        debug!(status, bytes = body.len(), "upstream responded");

        Ok(HttpResponse { status, body })
    }
}
