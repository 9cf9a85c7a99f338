//! Handlers for `/thumbnails`.
//!
//! # Design
//! The query string is read as ordered pairs rather than into a struct, so a
//! repeated parameter resolves to its first occurrence instead of failing
//! extraction. Validation itself stays in `thumbnails-core`, which owns the
//! error messages.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thumbnails_core::SearchParams;
use tracing::{debug, instrument};

use crate::{error::AppError, AppState};

/// First value of `name` in the query, if present.
fn first<'a>(query: &'a [(String, String)], name: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[instrument(skip(state))]
pub async fn thumbnails_handler(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let params = SearchParams::from_query(first(&query, "channelId"), first(&query, "maxResults"))?;

    let request = state.search.build_search(&params);
    debug!(
        channel_id = params.channel_id(),
        max_results = params.max_results(),
        "querying upstream"
    );

    let response = state.upstream.execute(request).await?;
    let body = state.search.parse_search(response)?.to_json()?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// CORS preflight. The CORS headers themselves are added by the route layers.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_takes_earliest_occurrence() {
        let query = pairs(&[("channelId", "UC1"), ("maxResults", "3"), ("channelId", "UC2")]);
        assert_eq!(first(&query, "channelId"), Some("UC1"));
        assert_eq!(first(&query, "maxResults"), Some("3"));
    }

    #[test]
    fn first_is_case_sensitive_and_handles_absence() {
        let query = pairs(&[("channelid", "UC1")]);
        assert_eq!(first(&query, "channelId"), None);
        assert_eq!(first(&[], "maxResults"), None);
    }
}
