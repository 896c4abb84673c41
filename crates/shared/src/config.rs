//! Application configuration management.

use serde::Deserialize;

/// Default remote rate feed endpoint.
pub const DEFAULT_FEED_URL: &str = "http://toolserver.org/~kaldari/rates.xml";

/// Application configuration.
///
/// Every option has a working default, so a bare environment is enough to
/// run against the public feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rate feed configuration.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Converter configuration.
    #[serde(default)]
    pub converter: ConverterConfig,
}

/// Rate feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Endpoint serving the rate document.
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Whole-request fetch timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Converter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterConfig {
    /// Currency every conversion resolves to.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CAMBIO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_feed_points_at_public_endpoint() {
        let config = FeedConfig::default();
        assert_eq!(config.url, DEFAULT_FEED_URL);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn default_currency_is_usd() {
        let config = ConverterConfig::default();
        assert_eq!(config.default_currency, "USD");
    }

    #[test]
    fn app_config_default_is_complete() {
        let config = AppConfig::default();
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert_eq!(config.converter.default_currency, "USD");
    }
}
