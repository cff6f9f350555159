mod lookup;
mod normalize;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stockproxy-cli")]
#[command(about = "Query and debug the stock lookup proxy from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch stock from the configured upstream and print the normalized list
    Lookup {
        /// Product code to look up
        #[arg(long)]
        sku: Option<String>,
        /// Destination number to look up
        #[arg(long)]
        number: Option<String>,
        /// Print the full JSON response body instead of the text block
        #[arg(long)]
        json: bool,
    },
    /// Normalize a saved upstream body (file path, or stdin when omitted)
    Normalize {
        /// Path to the saved body; `-` or nothing reads stdin
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let level = std::env::var("STOCKPROXY_LOG_LEVEL").ok();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_directive(level.as_deref())))?;
    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Lookup { sku, number, json } => {
            let config = stockproxy_core::load_app_config()?;
            lookup::run_lookup(&config, sku, number, json).await
        }
        Commands::Normalize { file } => normalize::run_normalize(file.as_deref()),
    }
}

/// Filter directive when `RUST_LOG` is unset: `STOCKPROXY_LOG_LEVEL` if
/// non-blank, otherwise `warn` so command output is not buried in logs.
fn log_directive(level: Option<&str>) -> &str {
    level
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or("warn")
}

#[cfg(test)]
mod tests;
