//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe the upstream request and response as plain data. The
//! core crate builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; the server crate executes the round-trip.
//! That keeps URL construction and response mapping deterministic and easy
//! to test without a live upstream.

/// HTTP method for a request. The search API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An outbound HTTP request described as plain data.
///
/// Built by `YouTubeSearchClient::build_search`. `url` is absolute and
/// already carries the encoded query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An upstream HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `YouTubeSearchClient::parse_search`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
