use std::env;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
    pub password: PasswordConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub request_timeout_secs: u64,
}

/// Bearer token settings.
///
/// `secret` is the base64 encoding of the HMAC key and never appears in
/// `Debug` output.
#[derive(Deserialize, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// Argon2 cost parameters.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

impl TokenConfig {
    const MIN_SECRET_BYTES: usize = 32;

    /// Decode the signing key.
    ///
    /// # Errors
    /// Returns error if the secret is not valid base64 or shorter than 256 bits
    pub fn secret_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let bytes = STANDARD
            .decode(self.secret.trim())
            .map_err(|e| ConfigError::Message(format!("TOKEN_SECRET is not valid base64: {}", e)))?;

        if bytes.len() < Self::MIN_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "TOKEN_SECRET must decode to at least {} bytes, got {}",
                Self::MIN_SECRET_BYTES,
                bytes.len()
            )));
        }

        Ok(bytes)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Flat environment variables (TOKEN_SECRET, TOKEN_TTL_SECONDS, DB_URL, DB_MAX_CONNECTIONS, CORS_ORIGINS)
    /// 2. Nested environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults
    ///
    /// There is no default for the token secret: loading fails without one.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8080)?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("database.max_connections", 5)?
            .set_default("token.ttl_seconds", 3600)?
            .set_default("password.memory_kib", 19456)?
            .set_default("password.iterations", 2)?
            .set_default("password.parallelism", 1)?
            .set_default(
                "cors.origins",
                vec!["http://localhost:3000", "http://localhost:4200"],
            )?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .set_override_option("token.secret", env::var("TOKEN_SECRET").ok())?
            .set_override_option("token.ttl_seconds", env::var("TOKEN_TTL_SECONDS").ok())?
            .set_override_option("database.url", env::var("DB_URL").ok())?
            .set_override_option(
                "database.max_connections",
                env::var("DB_MAX_CONNECTIONS").ok(),
            )?
            .set_override_option("cors.origins", env::var("CORS_ORIGINS").ok().map(split_origins))?
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Check the values serde cannot express.
    ///
    /// # Errors
    /// Returns error on an unusable secret, non-positive TTL or timeout, or empty CORS list
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.token.secret_bytes()?;

        if self.token.ttl_seconds <= 0 {
            return Err(ConfigError::Message(format!(
                "TOKEN_TTL_SECONDS must be positive, got {}",
                self.token.ttl_seconds
            )));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "server.request_timeout_secs must be positive".to_string(),
            ));
        }

        if self.cors.origins.is_empty() {
            return Err(ConfigError::Message(
                "CORS_ORIGINS must list at least one origin".to_string(),
            ));
        }

        Ok(())
    }
}

fn split_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
