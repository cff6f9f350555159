pub mod app_config;
pub mod config;
pub mod stock;

pub use app_config::{AppConfig, Environment, DEFAULT_FETCH_TIMEOUT_MS};
pub use config::{load_app_config, load_app_config_from_env};
pub use stock::{render_stock_text, StockRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
