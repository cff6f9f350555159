//! `normalize` command: run the normalizer over a saved upstream body.
//!
//! Handy when onboarding a new upstream: capture one response with `curl`
//! and check which records come out, without touching the network.

use std::io::Read;
use std::path::Path;

use stockproxy_core::render_stock_text;
use stockproxy_lookup::{normalize, ExtractionPhase};

/// # Errors
///
/// Returns an error if the input cannot be read, or if nothing could be
/// extracted from it.
pub(crate) fn run_normalize(file: Option<&Path>) -> anyhow::Result<()> {
    let body = read_body(file)?;
    let result = normalize(&body);

    if result.phase == ExtractionPhase::None {
        anyhow::bail!("no stock entries recognized in input");
    }

    let in_stock = result.records.iter().filter(|r| r.is_in_stock()).count();
    println!("{}", render_stock_text(&result.records));
    eprintln!(
        "{} record(s) via {} extraction, {in_stock} in stock",
        result.len(),
        phase_label(result.phase)
    );
    Ok(())
}

fn read_body(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

pub(crate) fn phase_label(phase: ExtractionPhase) -> &'static str {
    match phase {
        ExtractionPhase::Structured => "structured",
        ExtractionPhase::MessageLines => "message-line",
        ExtractionPhase::None => "no",
    }
}
