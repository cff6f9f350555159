//! Field alias tables and value coercion for loosely-typed upstream entries.
//!
//! Upstreams disagree on field names (`sku` vs `kode`, `stock` vs `qty`) and
//! on how availability is encoded (integers, booleans, numeric strings,
//! Indonesian or English status words). Everything here is pure and
//! order-deterministic: aliases are checked in the listed order and the first
//! usable one wins.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

pub const SKU_ALIASES: &[&str] = &["sku", "kode", "code", "product", "product_code"];
pub const NAME_ALIASES: &[&str] = &["nama", "name", "product_name", "title"];
pub const STOCK_ALIASES: &[&str] = &[
    "stock", "stok", "qty", "quantity", "sisa", "available", "status",
];

static SIGNED_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+$").expect("valid regex"));
static IN_STOCK_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:ready|tersedia|available|ada)\b").expect("valid regex")
});
static OUT_OF_STOCK_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:habis|sold ?out|kosong|tidak)\b").expect("valid regex")
});

/// Case-insensitive view over one entry's own fields.
///
/// When an entry carries the same key in two casings (`SKU` and `sku`), the
/// one serde_json iterates first is kept.
pub struct FieldIndex<'a> {
    fields: HashMap<String, &'a Value>,
}

impl<'a> FieldIndex<'a> {
    #[must_use]
    pub fn new(entry: &'a Map<String, Value>) -> Self {
        let mut fields = HashMap::with_capacity(entry.len());
        for (key, value) in entry {
            fields.entry(key.to_lowercase()).or_insert(value);
        }
        Self { fields }
    }

    /// First alias whose value is present and not `null`.
    #[must_use]
    pub fn first_present(&self, aliases: &[&str]) -> Option<&'a Value> {
        aliases
            .iter()
            .filter_map(|alias| self.fields.get(*alias).copied())
            .find(|value| !value.is_null())
    }

    /// First alias whose value renders to non-blank text (strings and
    /// numbers only), trimmed.
    #[must_use]
    pub fn first_text(&self, aliases: &[&str]) -> Option<String> {
        aliases
            .iter()
            .filter_map(|alias| self.fields.get(*alias).copied())
            .find_map(value_as_text)
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Coerces a raw stock value into units on hand.
///
/// Returns `None` when the value cannot be interpreted; callers skip the
/// entry rather than guess.
#[must_use]
pub fn coerce_stock(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::String(text) => coerce_stock_text(text),
        Value::Number(number) => number.as_i64().or_else(|| {
            // u64 beyond i64::MAX falls through to f64 and saturates.
            number.as_f64().filter(|f| f.is_finite()).map(truncate_to_i64)
        }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integer text is parsed directly; otherwise availability words decide,
/// wherever they appear in the text.
///
/// Sold-out words are checked first, so negated phrases such as
/// `tidak ada` or `tidak tersedia` read as 0.
#[must_use]
pub fn coerce_stock_text(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if SIGNED_INTEGER.is_match(trimmed) {
        return trimmed.parse::<i64>().ok();
    }
    if OUT_OF_STOCK_WORD.is_match(trimmed) {
        return Some(0);
    }
    if IN_STOCK_WORD.is_match(trimmed) {
        return Some(1);
    }
    None
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_to_i64(value: f64) -> i64 {
    value.trunc() as i64
}
