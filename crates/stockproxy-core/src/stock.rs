use serde::{Deserialize, Serialize};

/// One canonical stock entry extracted from an upstream payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Upper-cased product code, unique within a single lookup result.
    pub sku: String,
    /// Display label; falls back to `sku` when the upstream omits it.
    pub name: String,
    /// Units on hand. Negative values are passed through as reported.
    pub stock: i64,
}

impl StockRecord {
    #[must_use]
    pub fn new(sku: impl Into<String>, name: impl Into<String>, stock: i64) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            stock,
        }
    }

    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl std::fmt::Display for StockRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) {} : {}", self.sku, self.name, self.stock)
    }
}

/// Renders records as `(SKU) Name : stock` lines joined by `\n`, in order.
#[must_use]
pub fn render_stock_text(records: &[StockRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
