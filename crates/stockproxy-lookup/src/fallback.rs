//! Line-based extraction for upstreams that report stock as a free-text
//! message, one `(CODE) Label : qty` entry per line.
//!
//! Only consulted when structured extraction finds nothing. Further text
//! formats belong in sibling functions with the same signature.

use std::sync::LazyLock;

use regex::Regex;
use stockproxy_core::StockRecord;

use crate::normalize::dedup_by_sku;
use crate::types::RawPayload;

static STOCK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*([^()\s][^()]*?)\s*\).*:\s*([+-]?\d+)$").expect("valid regex")
});

/// Extracts records from the payload's message text, if any.
#[must_use]
pub fn extract_message_lines(payload: &RawPayload) -> Vec<StockRecord> {
    payload
        .message()
        .map(parse_stock_lines)
        .unwrap_or_default()
}

/// Parses `(CODE) anything : qty` lines; other lines are ignored.
///
/// The first line for a code wins; later repeats are dropped.
#[must_use]
pub fn parse_stock_lines(message: &str) -> Vec<StockRecord> {
    let records = message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_stock_line)
        .collect();
    dedup_by_sku(records)
}

fn parse_stock_line(line: &str) -> Option<StockRecord> {
    let caps = STOCK_LINE.captures(line)?;
    let sku = caps.get(1)?.as_str().to_uppercase();
    let stock = caps.get(2)?.as_str().parse::<i64>().ok()?;
    // This format has no separate label; the code doubles as the name.
    Some(StockRecord::new(sku.clone(), sku, stock))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_of_a_code_wins() {
        let records = parse_stock_lines("(A1) Paket A : 5\n(A1) Paket A : 9\n(B2) Paket B : 0");
        assert_eq!(
            records,
            vec![StockRecord::new("A1", "A1", 5), StockRecord::new("B2", "B2", 0)]
        );
    }

    #[test]
    fn crlf_and_blank_lines_are_tolerated() {
        let records = parse_stock_lines("\r\n  (x7) Voucher 10K : 12  \r\n\r\n(y8) Voucher 20K:-1\r\n");
        assert_eq!(
            records,
            vec![StockRecord::new("X7", "X7", 12), StockRecord::new("Y8", "Y8", -1)]
        );
    }

    #[test]
    fn non_matching_lines_are_ignored() {
        let records = parse_stock_lines(
            "Daftar stok hari ini:\n(A1) Paket A : banyak\nA1 Paket A : 3\n(C3) Paket C : 4",
        );
        assert_eq!(records, vec![StockRecord::new("C3", "C3", 4)]);
    }

    #[test]
    fn colon_inside_label_uses_trailing_quantity() {
        let records = parse_stock_lines("(Z1) Promo: Paket Z : 8");
        assert_eq!(records, vec![StockRecord::new("Z1", "Z1", 8)]);
    }

    #[test]
    fn blank_code_is_rejected() {
        let records = parse_stock_lines("( ) Paket : 3\n()  Kosong : 1\n(A1) Paket A : 5");
        assert_eq!(records, vec![StockRecord::new("A1", "A1", 5)]);
    }

    #[test]
    fn opaque_body_is_read_as_message() {
        let payload = RawPayload::parse("(K1) Kuota 1GB : 3");
        assert_eq!(
            extract_message_lines(&payload),
            vec![StockRecord::new("K1", "K1", 3)]
        );
    }

    #[test]
    fn missing_message_yields_nothing() {
        let payload = RawPayload::parse(r#"{"data": []}"#);
        assert!(extract_message_lines(&payload).is_empty());
    }
}
