use super::*;

#[test]
fn parses_lookup_with_sku() {
    let cli = Cli::try_parse_from(["stockproxy-cli", "lookup", "--sku", "A1"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Lookup {
            sku: Some(ref sku),
            number: None,
            json: false,
        } if sku == "A1"
    ));
}

#[test]
fn parses_lookup_with_number_and_json() {
    let cli = Cli::try_parse_from(["stockproxy-cli", "lookup", "--number", "0812", "--json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Lookup {
            sku: None,
            number: Some(_),
            json: true,
        }
    ));
}

#[test]
fn parses_normalize_with_file() {
    let cli = Cli::try_parse_from(["stockproxy-cli", "normalize", "body.json"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Normalize { file: Some(ref path) } if path == std::path::Path::new("body.json")
    ));
}

#[test]
fn parses_normalize_without_file() {
    let cli = Cli::try_parse_from(["stockproxy-cli", "normalize"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Normalize { file: None }));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["stockproxy-cli"]).is_err());
}

#[test]
fn phase_labels_are_human_readable() {
    use stockproxy_lookup::ExtractionPhase;

    assert_eq!(normalize::phase_label(ExtractionPhase::Structured), "structured");
    assert_eq!(normalize::phase_label(ExtractionPhase::MessageLines), "message-line");
}

#[test]
fn normalize_reads_saved_body_from_file() {
    let path = std::env::temp_dir().join(format!("stockproxy-cli-test-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"data":[{"sku":"a1","stock":2}]}"#).expect("write fixture");

    let result = normalize::run_normalize(Some(&path));
    std::fs::remove_file(&path).ok();

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[test]
fn normalize_fails_when_nothing_is_recognized() {
    let path = std::env::temp_dir().join(format!(
        "stockproxy-cli-empty-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{"data":[]}"#).expect("write fixture");

    let result = normalize::run_normalize(Some(&path));
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}

#[test]
fn log_directive_prefers_configured_level() {
    assert_eq!(log_directive(Some("debug")), "debug");
    assert_eq!(log_directive(Some(" stockproxy_lookup=trace ")), "stockproxy_lookup=trace");
}

#[test]
fn log_directive_defaults_to_warn() {
    assert_eq!(log_directive(None), "warn");
    assert_eq!(log_directive(Some("  ")), "warn");
}
