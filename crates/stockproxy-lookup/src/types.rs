//! Request-scoped values passed between the fetcher, normalizer and assembler.

use serde_json::Value;
use stockproxy_core::StockRecord;

/// Identifier(s) forwarded to the upstream as query parameters.
///
/// The normalizer never filters by these; the upstream decides what it
/// returns for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockQuery {
    pub sku: Option<String>,
    pub number: Option<String>,
}

impl StockQuery {
    /// Builds a query, dropping blank identifiers.
    #[must_use]
    pub fn new(sku: Option<String>, number: Option<String>) -> Self {
        let keep = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            sku: keep(sku),
            number: keep(number),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sku.is_none() && self.number.is_none()
    }

    /// Query parameters in the order they are sent upstream.
    pub fn params(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("sku", self.sku.as_deref()), ("number", self.number.as_deref())]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

/// A completed upstream exchange, whatever its HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, e.g. `"Bad Gateway"`.
    pub reason: String,
    pub body: String,
}

impl UpstreamResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of exactly one upstream attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(UpstreamResponse),
    /// The deadline elapsed before the response body was fully read.
    TimedOut,
    TransportError {
        message: String,
    },
}

/// Upstream body after the JSON parse attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    Structured(Value),
    /// Body that is not valid JSON, kept verbatim.
    Opaque(String),
}

impl RawPayload {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str::<Value>(raw).map_or_else(
            |_| Self::Opaque(raw.to_string()),
            Self::Structured,
        )
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Opaque(_) => None,
        }
    }

    /// Free-text message carried by the payload: `data.message`, then the
    /// top-level `message`. An opaque body is its own message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        let non_blank = |m: &&str| !m.trim().is_empty();
        match self {
            Self::Structured(value) => value
                .get("data")
                .and_then(|data| data.get("message"))
                .and_then(Value::as_str)
                .filter(non_blank)
                .or_else(|| value.get("message").and_then(Value::as_str).filter(non_blank)),
            Self::Opaque(text) => Some(text.as_str()).filter(non_blank),
        }
    }

    /// JSON form forwarded to callers for diagnostics.
    #[must_use]
    pub fn to_diagnostic_value(&self) -> Value {
        match self {
            Self::Structured(value) => value.clone(),
            Self::Opaque(text) => serde_json::json!({ "raw": text }),
        }
    }
}

/// Which extraction phase produced a [`NormalizationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPhase {
    Structured,
    MessageLines,
    /// No phase produced anything.
    None,
}

/// Ordered, sku-unique records extracted from one upstream body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationResult {
    pub phase: ExtractionPhase,
    pub records: Vec<StockRecord>,
}

impl NormalizationResult {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            phase: ExtractionPhase::None,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
