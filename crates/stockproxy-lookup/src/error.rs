use thiserror::Error;

/// Everything that can stop a stock lookup from producing a record list.
///
/// Each variant maps to the HTTP status the proxy answers with; see
/// [`LookupError::status_code`]. A malformed upstream body is deliberately
/// absent: it degrades to opaque text instead of failing.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("SUPPLIER_URL is not configured")]
    ConfigurationMissing,

    #[error("invalid upstream endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to build upstream HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("parameter 'sku' or 'number' is required")]
    MissingIdentifier,

    #[error("timed out waiting for the upstream stock server")]
    UpstreamTimeout,

    #[error("upstream request failed: {message}")]
    UpstreamTransportFailure { message: String },

    /// The upstream answered with a non-2xx status. `data` is whatever could
    /// be parsed from its body, forwarded for diagnostics.
    #[error("upstream {status} {reason}")]
    UpstreamHttpError {
        status: u16,
        reason: String,
        data: serde_json::Value,
    },

    /// A 2xx answer from which no stock entry could be extracted.
    #[error("upstream returned no recognizable stock entries")]
    UpstreamEmptyExtraction {
        status: u16,
        data: serde_json::Value,
    },
}

impl LookupError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ConfigurationMissing | Self::InvalidEndpoint { .. } | Self::ClientBuild(_) => {
                500
            }
            Self::MissingIdentifier => 400,
            Self::UpstreamTimeout => 504,
            Self::UpstreamTransportFailure { .. }
            | Self::UpstreamHttpError { .. }
            | Self::UpstreamEmptyExtraction { .. } => 502,
        }
    }

    /// Upstream HTTP status, when the upstream answered at all.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamHttpError { status, .. } | Self::UpstreamEmptyExtraction { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Diagnostic payload forwarded to the caller, if any.
    #[must_use]
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            Self::UpstreamHttpError { data, .. } | Self::UpstreamEmptyExtraction { data, .. } => {
                Some(data)
            }
            _ => None,
        }
    }
}
