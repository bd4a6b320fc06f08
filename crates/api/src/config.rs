/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Base URL of the exchange-rate service (default: Frankfurter).
    pub exchange_api_url: String,
    /// Timeout for a single exchange-rate lookup in seconds (default: `10`).
    pub exchange_timeout_secs: u64,
}

/// Public Frankfurter instance used for currency conversion.
pub const DEFAULT_EXCHANGE_API_URL: &str = "https://api.frankfurter.app";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                       |
    /// |-------------------------|-------------------------------|
    /// | `HOST`                  | `0.0.0.0`                     |
    /// | `PORT`                  | `3000`                        |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                          |
    /// | `DB_MAX_CONNECTIONS`    | `20`                          |
    /// | `EXCHANGE_API_URL`      | `https://api.frankfurter.app` |
    /// | `EXCHANGE_TIMEOUT_SECS` | `10`                          |
    ///
    /// Panics on unparsable numeric values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = var("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(portfolio_db::DEFAULT_MAX_CONNECTIONS);

        let exchange_api_url = var("EXCHANGE_API_URL")
            .unwrap_or_else(|| DEFAULT_EXCHANGE_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        let exchange_timeout_secs: u64 = var("EXCHANGE_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .expect("EXCHANGE_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            exchange_api_url,
            exchange_timeout_secs,
        }
    }
}
