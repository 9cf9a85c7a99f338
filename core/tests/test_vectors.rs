//! Verify build/parse against JSON test vectors stored in `test-vectors/`.
//!
//! Each case describes raw query input, the expected upstream request, a
//! simulated upstream response, and the expected public payload. Results are
//! compared as parsed JSON so field order does not matter.

use thumbnails_core::{ApiError, HttpMethod, HttpResponse, SearchParams, YouTubeSearchClient};

const BASE_URL: &str = "http://localhost:4000";

fn client() -> YouTubeSearchClient {
    YouTubeSearchClient::new(BASE_URL, "test-key")
}

fn vectors() -> serde_json::Value {
    let raw = include_str!("../../test-vectors/search.json");
    serde_json::from_str(raw).unwrap()
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

fn response(case: &serde_json::Value) -> HttpResponse {
    HttpResponse {
        status: case["status"].as_u64().unwrap() as u16,
        body: case["body"].as_str().unwrap().to_string(),
    }
}

#[test]
fn search_test_vectors() {
    let c = client();
    for case in vectors()["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let params = SearchParams::from_query(
            input["channelId"].as_str(),
            input["maxResults"].as_str(),
        )
        .unwrap();

        let expected_req = &case["expected_request"];
        let req = c.build_search(&params);
        assert_eq!(
            req.method,
            parse_method(expected_req["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected_req["url"].as_str().unwrap()),
            "{name}: url"
        );

        let result = c.parse_search(response(&case["simulated_response"])).unwrap();
        let actual: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(actual, case["expected_result"], "{name}: result");
    }
}

#[test]
fn validation_test_vectors() {
    for case in vectors()["errors"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let err = SearchParams::from_query(
            input["channelId"].as_str(),
            input["maxResults"].as_str(),
        )
        .unwrap_err();
        match err {
            ApiError::InvalidParameter { name: param, .. } => {
                assert_eq!(param, case["parameter"].as_str().unwrap(), "{name}: parameter")
            }
            other => panic!("{name}: unexpected error {other:?}"),
        }
    }
}

#[test]
fn upstream_failure_test_vectors() {
    let c = client();
    for case in vectors()["upstream_failures"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let err = c.parse_search(response(case)).unwrap_err();
        match (case["kind"].as_str().unwrap(), &err) {
            ("upstream", ApiError::Upstream { status, body }) => {
                assert_eq!(u64::from(*status), case["status"].as_u64().unwrap(), "{name}: status");
                assert_eq!(body, case["body"].as_str().unwrap(), "{name}: body");
            }
            ("schema", ApiError::UpstreamSchema(_)) => {}
            (kind, other) => panic!("{name}: expected {kind}, got {other:?}"),
        }
    }
}
