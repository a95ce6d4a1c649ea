pub(crate) mod auth;
pub(crate) mod extract;
pub(crate) mod rankings;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{RankingsError, Result};

/// Send a request and read the whole response body as text.
///
/// Transport failures, including a body that cannot be read, surface as
/// [`RankingsError::Network`]. The status is returned unchecked so each
/// caller can map rejections onto its own error.
pub(crate) async fn send(
    request: reqwest::RequestBuilder,
    url: &str,
) -> Result<(reqwest::StatusCode, String)> {
    debug!(url, "sending request");

    let response = request
        .send()
        .await
        .map_err(|e| RankingsError::network(url, e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| RankingsError::network(url, e))?;

    debug!(url, %status, bytes = body.len(), "received response");
    Ok((status, body))
}

/// Decode a successful response body, mapping failures to
/// [`RankingsError::MalformedResponse`].
pub(crate) fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| RankingsError::malformed(url, e.to_string()))
}
