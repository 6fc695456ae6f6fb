//! Configuration for the meeple server
//!
//! Settings load from optional config files plus `MEEPLE`-prefixed
//! environment variables with `__` as the nesting separator, so
//! `MEEPLE__SERVER__PORT=8080` overrides `server.port`.

use serde::Deserialize;
use std::net::SocketAddr;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub bgg: BggConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Origins allowed by CORS. Empty means no CORS headers are emitted.
    pub cors_origins: Vec<String>,

    /// Maximum accepted request body size in bytes.
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            max_request_body_size: 1024 * 1024,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set (trace, debug, info, warn, error).
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Upstream BGG API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BggConfig {
    pub base_url: String,

    /// Request timeout for upstream calls, in seconds.
    pub timeout_seconds: u64,

    /// Number of game records kept in the in-process detail cache.
    pub game_cache_size: NonZeroUsize,

    /// How long a cached game record stays fresh, in seconds.
    pub game_cache_ttl_seconds: u64,
}

impl Default for BggConfig {
    fn default() -> Self {
        Self {
            base_url: "https://boardgamegeek.com/xmlapi2".to_string(),
            timeout_seconds: 30,
            game_cache_size: NonZeroUsize::new(256).unwrap(),
            game_cache_ttl_seconds: 24 * 60 * 60,
        }
    }
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Sources in order of precedence (later wins):
    /// 1. `config/default` (optional)
    /// 2. `config/local` (optional)
    /// 3. Environment variables with the `MEEPLE` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        // Pick up a local .env file if present
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("MEEPLE")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration values that serde cannot check.
    pub fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.bgg.base_url)
            .map_err(|e| format!("bgg.base_url is not a valid URL: {e}"))?;

        if self.bgg.timeout_seconds == 0 {
            return Err("bgg.timeout_seconds must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bgg.base_url, "https://boardgamegeek.com/xmlapi2");
        assert_eq!(config.bgg.game_cache_size.get(), 256);
    }

    #[test]
    fn default_socket_addr_parses() {
        let addr = Config::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn validate_rejects_invalid_base_url() {
        let mut config = Config::default();
        config.bgg.base_url = "not a url".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.bgg.timeout_seconds = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn sections_deserialize_from_partial_input() {
        let config: Config = serde_json::from_str(r#"{"server": {"port": 8080}}"#).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }
}
