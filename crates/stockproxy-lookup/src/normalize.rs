//! Normalization of arbitrary upstream bodies into canonical [`StockRecord`]s.
//!
//! Extraction runs as an ordered list of pure phases over the same parsed
//! payload. The first phase that yields at least one record decides the
//! result; phases are never merged. Structured JSON entries come first, the
//! free-text message parser in [`crate::fallback`] second.

use std::collections::HashSet;

use serde_json::Value;
use stockproxy_core::StockRecord;

use crate::coerce::{coerce_stock, FieldIndex, NAME_ALIASES, SKU_ALIASES, STOCK_ALIASES};
use crate::fallback::extract_message_lines;
use crate::types::{ExtractionPhase, NormalizationResult, RawPayload};

type Extractor = fn(&RawPayload) -> Vec<StockRecord>;

const PHASES: [(ExtractionPhase, Extractor); 2] = [
    (ExtractionPhase::Structured, extract_structured),
    (ExtractionPhase::MessageLines, extract_message_lines),
];

/// Keys probed, in order, for the entry collection when neither `data` nor
/// the payload itself is an array.
const COLLECTION_KEYS: &[&str] = &["items", "result", "rows"];

/// Normalizes a raw upstream body.
///
/// Bodies that are not valid JSON skip straight to message-line parsing.
/// Deterministic: the same input always yields the same ordered records.
#[must_use]
pub fn normalize(raw_body: &str) -> NormalizationResult {
    normalize_payload(&RawPayload::parse(raw_body))
}

/// Normalizes an already-parsed payload.
#[must_use]
pub fn normalize_payload(payload: &RawPayload) -> NormalizationResult {
    PHASES
        .iter()
        .find_map(|(phase, extract)| {
            let records = extract(payload);
            (!records.is_empty()).then(|| NormalizationResult {
                phase: *phase,
                records,
            })
        })
        .unwrap_or_else(NormalizationResult::empty)
}

/// Extracts records from the payload's entry collection.
#[must_use]
pub fn extract_structured(payload: &RawPayload) -> Vec<StockRecord> {
    let Some(value) = payload.as_value() else {
        return Vec::new();
    };

    let records = candidate_entries(value)
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let record = extract_entry(entry);
            if record.is_none() && entry.is_object() {
                tracing::debug!(position, "skipping upstream entry without usable sku or stock");
            }
            record
        })
        .collect();
    dedup_by_sku(records)
}

fn candidate_entries(value: &Value) -> &[Value] {
    if let Some(entries) = value.get("data").and_then(Value::as_array) {
        return entries;
    }
    if let Some(entries) = value.as_array() {
        return entries;
    }
    COLLECTION_KEYS
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn extract_entry(entry: &Value) -> Option<StockRecord> {
    let fields = FieldIndex::new(entry.as_object()?);

    let sku = fields.first_text(SKU_ALIASES)?.to_uppercase();
    let name = fields
        .first_text(NAME_ALIASES)
        .unwrap_or_else(|| sku.clone());
    let stock = coerce_stock(fields.first_present(STOCK_ALIASES)?)?;

    Some(StockRecord { sku, name, stock })
}

/// Drops records whose sku was already seen, keeping first occurrences in
/// their original order.
pub(crate) fn dedup_by_sku(records: Vec<StockRecord>) -> Vec<StockRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.sku.clone()))
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
