//! Upstream URL assembly.

use crate::error::LookupError;
use crate::types::StockQuery;

/// Builds the upstream URL: the configured endpoint with the query's
/// identifiers set as query parameters.
///
/// A parameter already present on the endpoint is replaced, not duplicated;
/// unrelated parameters are kept in place.
///
/// # Errors
///
/// Returns [`LookupError::InvalidEndpoint`] if `endpoint` is not an absolute URL.
pub fn upstream_url(endpoint: &str, query: &StockQuery) -> Result<reqwest::Url, LookupError> {
    let mut url = reqwest::Url::parse(endpoint).map_err(|e| LookupError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason: e.to_string(),
    })?;

    let overridden: Vec<&str> = query.params().map(|(key, _)| key).collect();
    if overridden.is_empty() {
        return Ok(url);
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !overridden.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    url.query_pairs_mut()
        .extend_pairs(kept)
        .extend_pairs(query.params());

    Ok(url)
}
