//! HTTP retrieval of section feed payloads.
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Time allowed to establish a connection.
const CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);
/// Time allowed between bytes once the connection is up.
const READ_TIMEOUT: Duration = Duration::from_millis(10_000);
const MAX_PAYLOAD_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors from fetching a single section URL.
///
/// A fetch error is always local to the URL it occurred on; sibling fetches
/// in the same round are unaffected.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, timeout)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with any status other than 200 OK
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body over the fixed size cap
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
}

/// Builds the HTTP client shared by all fetches.
///
/// Timeouts are fixed rather than configurable: 15 seconds to connect,
/// 10 seconds of read inactivity.
pub fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .read_timeout(READ_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}

/// Fetches one section payload.
///
/// Success is strictly HTTP 200; any other status (including other 2xx
/// codes) yields [`FetchError::HttpStatus`] and the body is never read.
/// Bodies are read through a 10MB cap, with anything larger rejected as
/// [`FetchError::ResponseTooLarge`]. Connections are released on every
/// path by `reqwest`'s drop semantics.
pub async fn fetch(client: &reqwest::Client, url: &Url) -> Result<Bytes, FetchError> {
    let response = client.get(url.clone()).send().await?;

    if response.status() != StatusCode::OK {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    read_limited(response, MAX_PAYLOAD_SIZE).await
}

async fn read_limited(response: reqwest::Response, limit: usize) -> Result<Bytes, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
    }

    // The header can be absent or wrong, so the cap is enforced on the
    // actual bytes as well.
    let mut bytes = BytesMut::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes.freeze())
}
