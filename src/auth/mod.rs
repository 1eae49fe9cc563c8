//! Authentication for API key protected HTTP services
//!
//! This module extracts caller-supplied API keys from HTTP Authorization
//! headers and maps extraction failures to `401 Unauthorized` responses.
//! Verifying the extracted key against a credential store is the caller's
//! concern, not this module's.

pub mod api_key;

pub use api_key::{API_KEY_SCHEME, AuthError, extract_api_key};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode, header};
use serde_json::json;

/// Extract the API key from an HTTP request
///
/// Runs [`extract_api_key`] over the request headers. On failure, returns
/// the `401 Unauthorized` response an authentication middleware is expected
/// to send, with a JSON body naming the failure:
///
/// ```json
/// {"error": "no authorization header included"}
/// ```
///
/// On success the extracted key is handed back unchanged for the caller to
/// verify.
///
/// # Arguments
/// * `req` - The HTTP request to read the Authorization header from
///
/// # Returns
/// * `Ok(key)` with the extracted API key
/// * `Err(Response)` with 401 Unauthorized if the header is missing or malformed
pub fn require_api_key<B>(req: &Request<B>) -> Result<String, Response<Full<Bytes>>> {
    extract_api_key(req.headers()).map_err(unauthorized_response)
}

/// Build the 401 response for a failed extraction
fn unauthorized_response(err: AuthError) -> Response<Full<Bytes>> {
    let body = json!({ "error": err.to_string() });

    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}
