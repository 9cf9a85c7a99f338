//! Stateless request builder and response mapper for the YouTube search API.
//!
//! # Design
//! `YouTubeSearchClient` holds only the upstream base URL and the API key,
//! both fixed at startup. `build_search` produces an `HttpRequest` and
//! `parse_search` consumes an `HttpResponse`; the caller executes the actual
//! round-trip in between.

use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{SearchListResponse, SearchParams, ThumbnailsResponse};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Synchronous, stateless client for the upstream `search.list` endpoint.
#[derive(Clone)]
pub struct YouTubeSearchClient {
    base_url: String,
    api_key: String,
}

// The key is a credential; keep it out of debug logs.
impl std::fmt::Debug for YouTubeSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeSearchClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl YouTubeSearchClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Build the search request for the newest videos of a channel.
    pub fn build_search(&self, params: &SearchParams) -> HttpRequest {
        let max_results = params.max_results().to_string();
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("part", "snippet")
            .append_pair("channelId", params.channel_id())
            .append_pair("maxResults", &max_results)
            .append_pair("order", "date")
            .append_pair("type", "video")
            .append_pair("key", &self.api_key)
            .finish();

        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/search?{query}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    /// Map an upstream search response to the public payload.
    pub fn parse_search(&self, response: HttpResponse) -> Result<ThumbnailsResponse, ApiError> {
        check_status(&response)?;
        let upstream: SearchListResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::UpstreamSchema(e.to_string()))?;
        Ok(ThumbnailsResponse::from(upstream))
    }
}

/// Any final status of 300 or above is a failure. Redirects the transport
/// followed on its own never reach this check.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status < 300 {
        return Ok(());
    }
    Err(ApiError::Upstream {
        status: response.status,
        body: response.body.clone(),
    })
}
