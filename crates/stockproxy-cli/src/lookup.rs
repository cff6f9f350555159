//! `lookup` command: one end-to-end lookup against the configured upstream.

use stockproxy_core::AppConfig;
use stockproxy_lookup::{StockLookup, StockQuery};

/// Runs one lookup and prints the text block (or the JSON body with `json`).
///
/// # Errors
///
/// Returns an error if the client cannot be built or the lookup does not
/// produce a successful response; the response body is printed first.
pub(crate) async fn run_lookup(
    config: &AppConfig,
    sku: Option<String>,
    number: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let lookup = StockLookup::from_config(config)?;
    let response = lookup.lookup(&StockQuery::new(sku, number)).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response.body)?);
    } else if let Some(text) = &response.body.text {
        println!("{text}");
    }

    if !response.is_success() {
        anyhow::bail!(
            "lookup failed with status {}: {}",
            response.status,
            response.body.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}
