//! Fetching remote documents.
//!
//! A single GET per invocation, no retries. The timeout is off unless the
//! caller sets one in [`Options`].

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// Build the HTTP client for `options`.
fn client(options: &Options) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(options.user_agent.as_str());
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Fetch `url` and return its body decoded to UTF-8.
///
/// Connection failures, timeouts and non-2xx responses all map to
/// [`Error::Fetch`].
pub async fn fetch(url: &Url, options: &Options) -> Result<String> {
    let fetch_err = |source| Error::Fetch {
        url: url.to_string(),
        source,
    };

    tracing::debug!(%url, timeout = ?options.timeout, "fetching");
    let response = client(options)
        .map_err(fetch_err)?
        .get(url.clone())
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(fetch_err)?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = response.bytes().await.map_err(fetch_err)?;
    tracing::debug!(%url, %status, bytes = body.len(), "fetched");

    Ok(encoding::transcode_with_content_type(
        &body,
        content_type.as_deref(),
    ))
}
