//! Turns a fetch outcome into the proxy's outward response.

use serde::Serialize;
use stockproxy_core::{render_stock_text, StockRecord};

use crate::error::LookupError;
use crate::normalize::normalize_payload;
use crate::types::{FetchOutcome, NormalizationResult, RawPayload};

/// `Cache-Control` for successful lookups: short edge freshness, longer
/// stale-while-revalidate window.
pub const SUCCESS_CACHE_CONTROL: &str = "s-maxage=30, stale-while-revalidate=300";
/// `Cache-Control` for every failure.
pub const FAILURE_CACHE_CONTROL: &str = "no-store";

/// JSON body returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockResponseBody {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<StockRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Status, body and cache hint, independent of any HTTP framework.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledResponse {
    pub status: u16,
    pub body: StockResponseBody,
    pub cache_control: &'static str,
}

impl AssembledResponse {
    #[must_use]
    pub fn success(upstream_status: u16, result: NormalizationResult) -> Self {
        let text = render_stock_text(&result.records);
        Self {
            status: 200,
            body: StockResponseBody {
                ok: true,
                error: None,
                upstream_status: Some(upstream_status),
                count: Some(result.records.len()),
                list: Some(result.records),
                text: Some(text),
                data: None,
            },
            cache_control: SUCCESS_CACHE_CONTROL,
        }
    }

    #[must_use]
    pub fn failure(error: &LookupError) -> Self {
        Self {
            status: error.status_code(),
            body: StockResponseBody {
                ok: false,
                error: Some(error.to_string()),
                upstream_status: error.upstream_status(),
                count: None,
                list: None,
                text: None,
                data: error.data().cloned(),
            },
            cache_control: FAILURE_CACHE_CONTROL,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.body.ok
    }
}

impl From<LookupError> for AssembledResponse {
    fn from(error: LookupError) -> Self {
        Self::failure(&error)
    }
}

/// Classifies one upstream outcome and, for 2xx answers, normalizes the body.
///
/// A 2xx answer that yields no records is a 502, not an empty success.
#[must_use]
pub fn assemble(outcome: FetchOutcome) -> AssembledResponse {
    match classify(outcome) {
        Ok((upstream_status, result)) => AssembledResponse::success(upstream_status, result),
        Err(error) => {
            tracing::warn!(error = %error, status = error.status_code(), "stock lookup failed");
            AssembledResponse::failure(&error)
        }
    }
}

fn classify(outcome: FetchOutcome) -> Result<(u16, NormalizationResult), LookupError> {
    let response = match outcome {
        FetchOutcome::Success(response) => response,
        FetchOutcome::TimedOut => return Err(LookupError::UpstreamTimeout),
        FetchOutcome::TransportError { message } => {
            return Err(LookupError::UpstreamTransportFailure { message })
        }
    };

    let payload = RawPayload::parse(&response.body);

    if !response.is_success() {
        return Err(LookupError::UpstreamHttpError {
            status: response.status,
            reason: response.reason,
            data: payload.to_diagnostic_value(),
        });
    }

    let result = normalize_payload(&payload);
    if result.is_empty() {
        return Err(LookupError::UpstreamEmptyExtraction {
            status: response.status,
            data: payload.to_diagnostic_value(),
        });
    }

    tracing::debug!(phase = ?result.phase, count = result.len(), "normalized upstream stock");
    Ok((response.status, result))
}
