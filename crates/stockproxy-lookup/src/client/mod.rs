//! HTTP client for the upstream stock-reporting endpoint.

mod url;

use std::time::Duration;

use reqwest::Client;

use crate::error::LookupError;
use crate::types::{FetchOutcome, UpstreamResponse};

pub use url::upstream_url;

/// `Accept` header sent on every upstream call.
pub const UPSTREAM_ACCEPT: &str = "application/json, text/plain;q=0.9, */*;q=0.8";

/// Credentials forwarded to the upstream. Both are sent when both are set.
#[derive(Clone, Default)]
pub struct UpstreamHeaders {
    /// Sent as `x-api-key`.
    pub api_key: Option<String>,
    /// Sent as `Authorization: Bearer <token>`.
    pub bearer_token: Option<String>,
}

impl std::fmt::Debug for UpstreamHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamHeaders")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

/// Performs single, deadline-bounded GETs against the upstream.
///
/// There is no retry and no caching here: one call per lookup keeps latency
/// bounded by the configured deadline.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    /// Creates an `UpstreamClient` with the given `User-Agent`.
    ///
    /// The per-call deadline is passed to [`Self::fetch`]; only the connect
    /// phase has a client-level bound.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ClientBuild`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(user_agent: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Issues one GET to `endpoint` and reads the whole body as text,
    /// whatever the status.
    ///
    /// The `timeout` covers sending the request and reading the body. When it
    /// elapses the in-flight request is dropped and [`FetchOutcome::TimedOut`]
    /// is returned; every other failure is a [`FetchOutcome::TransportError`].
    pub async fn fetch(
        &self,
        endpoint: &str,
        timeout: Duration,
        headers: &UpstreamHeaders,
    ) -> FetchOutcome {
        let mut request = self
            .client
            .get(endpoint)
            .header(reqwest::header::ACCEPT, UPSTREAM_ACCEPT);

        if let Some(key) = &headers.api_key {
            request = request.header("x-api-key", key);
        }
        if let Some(token) = &headers.bearer_token {
            request = request.bearer_auth(token);
        }

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>(UpstreamResponse {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            })
        };

        match tokio::time::timeout(timeout, exchange).await {
            Ok(Ok(response)) => {
                tracing::debug!(
                    status = response.status,
                    bytes = response.body.len(),
                    "upstream responded"
                );
                FetchOutcome::Success(response)
            }
            Ok(Err(e)) if e.is_timeout() => {
                tracing::warn!(error = %e, "upstream request timed out");
                FetchOutcome::TimedOut
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "upstream request failed");
                FetchOutcome::TransportError {
                    message: e.to_string(),
                }
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                    "upstream deadline elapsed"
                );
                FetchOutcome::TimedOut
            }
        }
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
