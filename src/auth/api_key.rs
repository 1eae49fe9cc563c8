//! API key extraction from HTTP Authorization headers
//!
//! This module handles extracting caller-supplied API keys from HTTP
//! Authorization headers using the `ApiKey <key>` scheme. The scheme token
//! is matched case-sensitively and the key is returned verbatim.

use hyper::header::{self, HeaderMap};
use thiserror::Error;

/// The literal scheme token expected at the start of the Authorization header
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Errors returned when an API key cannot be extracted
///
/// Both variants are fieldless, so callers branch on equality
/// (`err == AuthError::NoAuthHeader`) rather than matching message text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The Authorization header is absent or empty
    #[error("no authorization header included")]
    NoAuthHeader,

    /// The Authorization header is present but does not carry the
    /// `ApiKey <key>` scheme
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extract an API key from the Authorization header
///
/// Looks up the `Authorization` header (header-name lookup is
/// case-insensitive, as always with HTTP headers) and parses its value as
/// `ApiKey <key>`. The value is split into whitespace-delimited fields: the
/// first field must be exactly `ApiKey`, and the second field is the key,
/// returned verbatim with no trimming or unquoting. Fields after the second
/// are ignored.
///
/// Quirk, kept for compatibility: a value of `"ApiKey "` (trailing
/// whitespace, no key token) yields an empty key, while a bare `"ApiKey"`
/// is a malformed header.
///
/// # Arguments
/// * `headers` - The request headers to read the `Authorization` entry from
///
/// # Returns
/// * `Ok(key)` with the extracted key
/// * `Err(AuthError::NoAuthHeader)` if the header is absent or empty
/// * `Err(AuthError::MalformedHeader)` if the value does not match the scheme
///
/// # Examples
/// ```
/// use apikey_auth::auth::api_key::{AuthError, extract_api_key};
/// use hyper::header::{AUTHORIZATION, HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey abc123"));
/// assert_eq!(extract_api_key(&headers), Ok("abc123".to_string()));
///
/// assert_eq!(extract_api_key(&HeaderMap::new()), Err(AuthError::NoAuthHeader));
/// ```
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        // A present value that is not a valid header string is treated as
        // present-but-malformed, not missing.
        Some(value) => value.to_str().map_err(|_| AuthError::MalformedHeader)?,
        None => return Err(AuthError::NoAuthHeader),
    };

    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let mut fields = value.split_whitespace();
    if fields.next() != Some(API_KEY_SCHEME) {
        return Err(AuthError::MalformedHeader);
    }

    match fields.next() {
        Some(key) => Ok(key.to_string()),
        // No second field: a bare "ApiKey" is malformed, but "ApiKey "
        // carries an empty key.
        None if value.trim_start().len() > API_KEY_SCHEME.len() => Ok(String::new()),
        None => Err(AuthError::MalformedHeader),
    }
}
