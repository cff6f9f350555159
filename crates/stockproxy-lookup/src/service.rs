use std::time::Duration;

use stockproxy_core::AppConfig;

use crate::assemble::{assemble, AssembledResponse};
use crate::client::{upstream_url, UpstreamClient, UpstreamHeaders};
use crate::error::LookupError;
use crate::types::{FetchOutcome, StockQuery};

/// One configured upstream: fetch, normalize and assemble per lookup.
///
/// Holds no per-request state; cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct StockLookup {
    client: UpstreamClient,
    endpoint: Option<String>,
    headers: UpstreamHeaders,
    timeout: Duration,
}

impl StockLookup {
    /// # Errors
    ///
    /// Returns [`LookupError::ClientBuild`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        Ok(Self::new(
            UpstreamClient::new(&config.user_agent)?,
            config.supplier_url.clone(),
            UpstreamHeaders {
                api_key: config.supplier_key.clone(),
                bearer_token: config.supplier_token.clone(),
            },
            config.fetch_timeout(),
        ))
    }

    #[must_use]
    pub fn new(
        client: UpstreamClient,
        endpoint: Option<String>,
        headers: UpstreamHeaders,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            endpoint,
            headers,
            timeout,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Runs one lookup end to end. Never fails: every error is folded into
    /// the assembled response.
    pub async fn lookup(&self, query: &StockQuery) -> AssembledResponse {
        let response = match self.fetch(query).await {
            Ok(outcome) => assemble(outcome),
            Err(error) => {
                tracing::warn!(error = %error, "stock lookup rejected before upstream call");
                AssembledResponse::failure(&error)
            }
        };
        tracing::info!(
            sku = query.sku.as_deref(),
            number = query.number.as_deref(),
            status = response.status,
            count = response.body.count,
            "stock lookup complete"
        );
        response
    }

    /// Performs the upstream call for `query`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::MissingIdentifier`] when `query` has neither identifier.
    /// - [`LookupError::ConfigurationMissing`] when no endpoint is configured.
    /// - [`LookupError::InvalidEndpoint`] when the endpoint cannot be parsed.
    pub async fn fetch(&self, query: &StockQuery) -> Result<FetchOutcome, LookupError> {
        if query.is_empty() {
            return Err(LookupError::MissingIdentifier);
        }
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(LookupError::ConfigurationMissing)?;
        let url = upstream_url(endpoint, query)?;
        Ok(self.client.fetch(url.as_str(), self.timeout, &self.headers).await)
    }
}
