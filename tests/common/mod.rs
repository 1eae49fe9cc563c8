//! Common test helpers shared across integration test files

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::AUTHORIZATION;
use hyper::{Request, Response};
use serde_json::Value;

/// Build a request carrying the given Authorization header value
pub fn request_with_auth(value: &str) -> Request<()> {
    Request::builder()
        .uri("/v1/notes")
        .header(AUTHORIZATION, value)
        .body(())
        .expect("request should build")
}

/// Collect a response body and parse it as JSON
pub fn response_json(response: Response<Full<Bytes>>) -> Value {
    let bytes = tokio_test::block_on(response.into_body().collect())
        .expect("body collection should not fail")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}
