//! Round-trip against the live mock upstream.
//!
//! # Design
//! Starts `mock-upstream` on a random port, then drives the core client over
//! real HTTP using ureq. Validates that the built URL is accepted by a
//! server speaking the upstream's query format and that its response maps
//! cleanly.

use std::net::SocketAddr;

use mock_upstream::MockUpstream;
use thumbnails_core::{ApiError, HttpMethod, HttpResponse, SearchParams, YouTubeSearchClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses come
/// back as data and the core client interprets them.
fn execute(req: thumbnails_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.url).call(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        body,
    }
}

fn start(mock: MockUpstream) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_upstream::run(listener, mock).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn search_round_trip() {
    let mock = MockUpstream::with_videos(&["first", "second"]);
    let addr = start(mock.clone());
    let client = YouTubeSearchClient::new(&format!("http://{addr}"), "integration-key");

    let params = SearchParams::from_query(Some("UC a/b"), Some("2")).unwrap();
    let result = client.parse_search(execute(client.build_search(&params))).unwrap();

    assert_eq!(result.videos.len(), 2);
    assert_eq!(result.videos[0].video_url, "https://www.youtube.com/watch?v=first");
    assert_eq!(
        result.videos[1].thumbnail_url,
        "https://img.youtube.com/vi/second/maxresdefault.jpg"
    );
    assert_eq!(mock.hits(), 1);
}

#[test]
fn missing_key_is_reported_as_upstream_error() {
    let addr = start(MockUpstream::with_videos(&["x"]));
    let client = YouTubeSearchClient::new(&format!("http://{addr}"), "");

    let params = SearchParams::from_query(Some("UC1"), Some("1")).unwrap();
    let err = client
        .parse_search(execute(client.build_search(&params)))
        .unwrap_err();

    assert!(matches!(err, ApiError::Upstream { status: 403, .. }));
    assert_eq!(err.to_string(), "YouTube API returned response code 403");
}
