use std::time::Duration;

use serde_json::{Map, Value};

use atlas_providers::{Error, SemanticClient};
use atlas_testkit::{SemanticReply, SemanticServer};

#[test]
fn default_headers_require_string_values() {
	let mut headers = Map::new();

	headers.insert("x-atlas-client".to_string(), Value::String("tests".to_string()));

	let built = atlas_providers::default_headers(&headers).expect("Failed to build headers.");

	assert_eq!(built.get("x-atlas-client").expect("Missing header."), "tests");

	headers.insert("x-retries".to_string(), Value::from(3));

	let err = atlas_providers::default_headers(&headers).expect_err("Expected invalid header.");

	assert!(matches!(err, Error::InvalidConfig { .. }), "Unexpected error: {err:?}");
}

#[tokio::test]
async fn server_error_degrades_to_no_results() {
	let server = SemanticServer::start(|_| SemanticReply::Status(500))
		.await
		.expect("Failed to start mock server.");
	let client = SemanticClient::new(&server.semantic_config()).expect("Failed to build client.");

	assert!(client.search("summarize").await.is_empty());

	let err = client.try_search("summarize").await.expect_err("Expected status error.");

	assert!(matches!(err, Error::Status { status: 500 }), "Unexpected error: {err:?}");
}

#[tokio::test]
async fn malformed_body_degrades_to_no_results() {
	let server = SemanticServer::start(|_| SemanticReply::Malformed("{\"results\": [oops"))
		.await
		.expect("Failed to start mock server.");
	let client = SemanticClient::new(&server.semantic_config()).expect("Failed to build client.");

	assert!(client.search("summarize").await.is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_degrades_to_no_results() {
	let cfg = atlas_testkit::semantic_config("http://127.0.0.1:9");
	let client = SemanticClient::new(&cfg).expect("Failed to build client.");

	assert!(client.search("summarize").await.is_empty());
}

#[tokio::test]
async fn sends_query_top_and_threshold() {
	let server = SemanticServer::start(|query| {
		SemanticReply::results(serde_json::json!([
			{ "id": "summarize", "type": "task", "name": "Summarize", "similarity": 0.9, "matchReason": query },
		]))
	})
	.await
	.expect("Failed to start mock server.");
	let client = SemanticClient::new(&server.semantic_config()).expect("Failed to build client.");
	let results = client.search("  condense text ").await;

	assert_eq!(results.len(), 1);
	assert_eq!(results[0].id, "summarize");
	assert_eq!(results[0].match_reason.as_deref(), Some("condense text"));

	let requests = server.requests();

	assert_eq!(requests.len(), 1);
	assert_eq!(requests[0].get("q").map(String::as_str), Some("condense text"));
	assert_eq!(requests[0].get("top").map(String::as_str), Some("5"));
	assert_eq!(requests[0].get("threshold").map(String::as_str), Some("0.25"));
}

#[tokio::test]
async fn blank_query_skips_the_request() {
	let server = SemanticServer::start(|_| SemanticReply::results(serde_json::json!([])))
		.await
		.expect("Failed to start mock server.");
	let client = SemanticClient::new(&server.semantic_config()).expect("Failed to build client.");

	assert!(client.search("   ").await.is_empty());
	assert!(server.requests().is_empty());
}

#[tokio::test]
async fn configured_timeout_degrades_to_no_results() {
	let server = SemanticServer::start(|_| {
		SemanticReply::results(serde_json::json!([])).delayed(Duration::from_millis(500))
	})
	.await
	.expect("Failed to start mock server.");
	let mut cfg = server.semantic_config();

	cfg.timeout_ms = Some(50);

	let client = SemanticClient::new(&cfg).expect("Failed to build client.");
	let err = client.try_search("summarize").await.expect_err("Expected timeout.");

	assert!(matches!(err, Error::Reqwest(ref inner) if inner.is_timeout()), "Unexpected: {err:?}");
}
