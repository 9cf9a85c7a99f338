use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub kind: String,
    pub id: ResultId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultId {
    pub kind: String,
    pub video_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    pub kind: String,
    pub items: Vec<SearchResult>,
}

impl SearchListResponse {
    pub fn for_videos(ids: &[&str]) -> Self {
        Self {
            kind: "youtube#searchListResponse".to_string(),
            items: ids
                .iter()
                .map(|id| SearchResult {
                    kind: "youtube#searchResult".to_string(),
                    id: ResultId {
                        kind: "youtube#video".to_string(),
                        video_id: id.to_string(),
                    },
                })
                .collect(),
        }
    }
}

/// Stand-in for the YouTube `search.list` endpoint.
///
/// Answers every keyed request with a fixed status and body and records the
/// query parameters it saw. Requests without a `key` get the same 403 the
/// real API returns.
#[derive(Clone)]
pub struct MockUpstream {
    inner: Arc<Inner>,
    delay: Duration,
}

struct Inner {
    status: StatusCode,
    body: String,
    hits: AtomicUsize,
    queries: RwLock<Vec<HashMap<String, String>>>,
}

impl MockUpstream {
    pub fn with_videos(ids: &[&str]) -> Self {
        let body = serde_json::to_string(&SearchListResponse::for_videos(ids))
            .unwrap_or_else(|_| r#"{"items":[]}"#.to_string());
        Self::with_response(StatusCode::OK, body)
    }

    pub fn with_response(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                status,
                body: body.into(),
                hits: AtomicUsize::new(0),
                queries: RwLock::new(Vec::new()),
            }),
            delay: Duration::ZERO,
        }
    }

    /// Hold every response for `delay` before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of `/search` requests received so far.
    pub fn hits(&self) -> usize {
        self.inner.hits.load(Ordering::SeqCst)
    }

    pub async fn queries(&self) -> Vec<HashMap<String, String>> {
        self.inner.queries.read().await.clone()
    }
}

pub fn app(mock: MockUpstream) -> Router {
    Router::new()
        .route("/search", get(search))
        .with_state(mock)
}

pub async fn run(listener: TcpListener, mock: MockUpstream) -> Result<(), std::io::Error> {
    axum::serve(listener, app(mock)).await
}

/// Bind an ephemeral local port and serve `mock` on the current runtime.
pub async fn spawn(mock: MockUpstream) -> Result<SocketAddr, std::io::Error> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(run(listener, mock));
    Ok(addr)
}

async fn search(
    State(mock): State<MockUpstream>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    mock.inner.hits.fetch_add(1, Ordering::SeqCst);
    let has_key = query.get("key").is_some_and(|k| !k.is_empty());
    mock.inner.queries.write().await.push(query);

    if !mock.delay.is_zero() {
        tokio::time::sleep(mock.delay).await;
    }

    if !has_key {
        let body = serde_json::json!({
            "error": {
                "code": 403,
                "message": "Method doesn't allow unregistered callers",
                "status": "PERMISSION_DENIED",
            }
        });
        return (StatusCode::FORBIDDEN, axum::Json(body)).into_response();
    }

    (
        mock.inner.status,
        [(header::CONTENT_TYPE, "application/json; charset=UTF-8")],
        mock.inner.body.clone(),
    )
        .into_response()
}
