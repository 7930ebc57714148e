//! Configuration management for the Figma MCP server.
//!
//! Configuration is assembled from defaults and `MCP_`-prefixed environment
//! variables (a `.env` file is honored).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default Figma REST API endpoint.
pub const DEFAULT_FIGMA_BASE_URL: &str = "https://api.figma.com";

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Figma API endpoint and credentials.
    pub figma: FigmaConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Figma API access configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct FigmaConfig {
    /// Base URL of the REST API, without a trailing path.
    pub base_url: String,

    /// Personal access token, sent as `X-Figma-Token`.
    pub access_token: Option<String>,

    /// OAuth access token, sent as `Authorization: Bearer`.
    /// Takes precedence over `access_token`.
    pub oauth_token: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// The credential the client authenticates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigmaAuth<'a> {
    AccessToken(&'a str),
    OAuth(&'a str),
}

impl FigmaConfig {
    /// Select the credential to use, if any.
    pub fn auth(&self) -> Option<FigmaAuth<'_>> {
        non_blank(&self.oauth_token)
            .map(FigmaAuth::OAuth)
            .or_else(|| non_blank(&self.access_token).map(FigmaAuth::AccessToken))
    }
}

fn non_blank(token: &Option<String>) -> Option<&str> {
    token.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

/// Tokens are redacted from debug output.
impl std::fmt::Debug for FigmaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FigmaConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("oauth_token", &self.oauth_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for FigmaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FIGMA_BASE_URL.to_string(),
            access_token: None,
            oauth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "figma-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            figma: FigmaConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, the transport
    /// variables read by [`TransportConfig::from_env`], `MCP_FIGMA_BASE_URL`,
    /// `MCP_FIGMA_ACCESS_TOKEN`, `MCP_FIGMA_OAUTH_TOKEN` and
    /// `MCP_FIGMA_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_FIGMA_BASE_URL") {
            config.figma.base_url = base_url;
        }

        config.figma.access_token = std::env::var("MCP_FIGMA_ACCESS_TOKEN").ok();
        config.figma.oauth_token = std::env::var("MCP_FIGMA_OAUTH_TOKEN").ok();

        if let Ok(timeout) = std::env::var("MCP_FIGMA_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.figma.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_FIGMA_TIMEOUT_SECS '{}', using {}s",
                    timeout, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_figma_env() {
        unsafe {
            std::env::remove_var("MCP_FIGMA_ACCESS_TOKEN");
            std::env::remove_var("MCP_FIGMA_OAUTH_TOKEN");
            std::env::remove_var("MCP_FIGMA_BASE_URL");
            std::env::remove_var("MCP_FIGMA_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_figma_env_loaded() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_figma_env();
        unsafe {
            std::env::set_var("MCP_FIGMA_ACCESS_TOKEN", "figd_test_12345");
            std::env::set_var("MCP_FIGMA_BASE_URL", "http://localhost:9999");
            std::env::set_var("MCP_FIGMA_TIMEOUT_SECS", "5");
        }

        let config = Config::from_env();
        assert_eq!(config.figma.access_token.as_deref(), Some("figd_test_12345"));
        assert_eq!(config.figma.base_url, "http://localhost:9999");
        assert_eq!(config.figma.timeout_secs, 5);
        assert_eq!(
            config.figma.auth(),
            Some(FigmaAuth::AccessToken("figd_test_12345"))
        );

        clear_figma_env();
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_figma_env();
        unsafe {
            std::env::set_var("MCP_FIGMA_TIMEOUT_SECS", "soon");
        }

        let config = Config::from_env();
        assert_eq!(config.figma.timeout_secs, DEFAULT_TIMEOUT_SECS);

        clear_figma_env();
    }

    #[test]
    fn test_oauth_takes_precedence() {
        let figma = FigmaConfig {
            access_token: Some("pat".to_string()),
            oauth_token: Some("oauth".to_string()),
            ..FigmaConfig::default()
        };
        assert_eq!(figma.auth(), Some(FigmaAuth::OAuth("oauth")));
    }

    #[test]
    fn test_blank_tokens_ignored() {
        let figma = FigmaConfig {
            access_token: Some("   ".to_string()),
            oauth_token: Some(String::new()),
            ..FigmaConfig::default()
        };
        assert_eq!(figma.auth(), None);
    }

    #[test]
    fn test_tokens_redacted_in_debug() {
        let figma = FigmaConfig {
            access_token: Some("super_secret_pat".to_string()),
            oauth_token: Some("super_secret_oauth".to_string()),
            ..FigmaConfig::default()
        };
        let debug_str = format!("{:?}", figma);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
    }

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.figma.base_url, "https://api.figma.com");
        assert_eq!(config.figma.timeout_secs, 30);
        assert!(config.figma.auth().is_none());
    }
}
