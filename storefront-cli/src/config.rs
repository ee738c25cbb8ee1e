use storefront_client::ClientConfig;
use storefront_client::config::DEFAULT_BASE_URL;

/// CLI configuration
///
/// # Environment variables
///
/// | variable | default | meaning |
/// |----------|---------|---------|
/// | STOREFRONT_API_URL | https://dummyjson.com | product API base URL |
/// | STOREFRONT_TIMEOUT_SECS | 30 | request timeout (seconds) |
/// | LOG_LEVEL | warn | log level when RUST_LOG is unset |
/// | LOG_JSON | false | JSON log lines instead of pretty output |
/// | LOG_DIR | (unset) | directory for daily rotating log files |
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: var("STOREFRONT_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            timeout_secs: var("STOREFRONT_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "warn".into()),
            log_json: var("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: var("LOG_DIR").filter(|v| !v.is_empty()),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url).with_timeout(self.timeout_secs)
    }
}
