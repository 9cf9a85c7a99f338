//! Request validation and response mapping for the channel thumbnails proxy.
//!
//! # Overview
//! Validates inbound query parameters, builds the upstream YouTube search
//! `HttpRequest`, and maps the upstream `HttpResponse` into the public
//! thumbnails payload, all without touching the network (host-does-IO
//! pattern). The server crate executes the actual round-trip.
//!
//! # Design
//! - `YouTubeSearchClient` is stateless; it holds the base URL and API key.
//! - `SearchParams` can only be built through validation.
//! - Upstream failures keep their status and body for logging; `Display`
//!   output never includes the body.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{YouTubeSearchClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{SearchItem, SearchItemId, SearchListResponse, SearchParams, ThumbnailsResponse, VideoLinks};
