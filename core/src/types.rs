//! Request-scoped DTOs: validated inbound parameters, the upstream search
//! schema, and the public thumbnails payload.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi/";
const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// Validated inbound search parameters.
///
/// Only obtainable through `from_query`, so holding one means the channel id
/// is non-empty and `max_results` parsed as a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    channel_id: String,
    max_results: i64,
}

impl SearchParams {
    /// Validate raw query values. `channelId` is checked before `maxResults`.
    pub fn from_query(
        channel_id: Option<&str>,
        max_results: Option<&str>,
    ) -> Result<Self, ApiError> {
        let channel_id = match channel_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                return Err(ApiError::InvalidParameter {
                    name: "channelId",
                    message: "channelId is missing",
                })
            }
        };

        let max_results = max_results
            .unwrap_or_default()
            .parse::<i64>()
            .map_err(|_| ApiError::InvalidParameter {
                name: "maxResults",
                message: "maxResults needs to be a valid Integer",
            })?;

        Ok(Self {
            channel_id,
            max_results,
        })
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn max_results(&self) -> i64 {
        self.max_results
    }
}

/// Upstream `search.list` response. Only the fields the mapper reads are
/// modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchItem {
    pub id: SearchItemId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub video_id: String,
}

/// Public link pair for a single video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoLinks {
    pub thumbnail_url: String,
    pub video_url: String,
}

impl VideoLinks {
    pub fn for_video(video_id: &str) -> Self {
        Self {
            thumbnail_url: format!("{THUMBNAIL_BASE}{video_id}/maxresdefault.jpg"),
            video_url: format!("{WATCH_BASE}{video_id}"),
        }
    }
}

/// Body returned by `GET /thumbnails`. `videos` is always an array, empty
/// when the channel has no matching uploads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThumbnailsResponse {
    pub videos: Vec<VideoLinks>,
}

impl ThumbnailsResponse {
    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Serialization(e.to_string()))
    }
}

impl From<SearchListResponse> for ThumbnailsResponse {
    fn from(response: SearchListResponse) -> Self {
        Self {
            videos: response
                .items
                .iter()
                .map(|item| VideoLinks::for_video(&item.id.video_id))
                .collect(),
        }
    }
}
