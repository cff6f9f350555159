pub mod assemble;
pub mod client;
pub mod coerce;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod service;
pub mod types;

pub use assemble::{assemble, AssembledResponse, StockResponseBody};
pub use client::{upstream_url, UpstreamClient, UpstreamHeaders};
pub use error::LookupError;
pub use normalize::{normalize, normalize_payload};
pub use service::StockLookup;
pub use types::{
    ExtractionPhase, FetchOutcome, NormalizationResult, RawPayload, StockQuery, UpstreamResponse,
};
