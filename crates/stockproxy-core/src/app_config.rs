use std::net::SocketAddr;

/// Upstream deadline used when `FETCH_TIMEOUT_MS` is not set.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Upstream stock endpoint. `None` is tolerated at startup; lookups then
    /// fail with a configuration error until it is set.
    pub supplier_url: Option<String>,
    /// Sent as `x-api-key` when present.
    pub supplier_key: Option<String>,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub supplier_token: Option<String>,
    pub fetch_timeout_ms: u64,
    pub cors_origin: String,
    pub user_agent: String,
}

impl AppConfig {
    #[must_use]
    pub fn fetch_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("supplier_url", &self.supplier_url)
            .field(
                "supplier_key",
                &self.supplier_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "supplier_token",
                &self.supplier_token.as_ref().map(|_| "[redacted]"),
            )
            .field("fetch_timeout_ms", &self.fetch_timeout_ms)
            .field("cors_origin", &self.cors_origin)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
