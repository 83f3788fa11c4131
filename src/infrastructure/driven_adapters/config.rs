//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::fmt;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret value wiped from memory on drop and redacted in debug output
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([redacted])")
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// CORS origins; empty allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: SecretString,
    pub leeway_secs: u64,
}

/// Rate limiting for unauthenticated routes
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

/// Facebook Login / Instagram Graph API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramConfig {
    pub app_id: String,
    pub app_secret: SecretString,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub dialog_base_url: String,
    pub graph_base_url: String,
    pub api_version: String,
    /// Where the callback sends the browser once linking finishes
    pub frontend_redirect_url: String,
    pub state_ttl_secs: i64,
}

/// Transactional email provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub api_url: String,
    pub api_key: SecretString,
    pub from_address: String,
    pub from_name: Option<String>,
    pub timeout_secs: u64,
}

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    pub directory: String,
    /// Prefix prepended to stored file names in returned URLs
    pub public_base_url: String,
    pub max_image_bytes: usize,
    pub max_file_bytes: usize,
}

/// Public-facing application settings
#[derive(Debug, Clone, Deserialize)]
pub struct PublicAppConfig {
    /// Base of the links embedded in outgoing emails
    pub public_base_url: String,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub instagram: InstagramConfig,
    pub email: EmailConfig,
    pub uploads: UploadsConfig,
    pub app: PublicAppConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is unreadable or a required key is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .with_list_parse_key("instagram.scopes")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
