use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,

    /// Carts untouched for this long are swept from memory.
    #[serde(default = "default_cart_idle_ttl")]
    pub cart_idle_ttl_secs: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the JSON collection documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory uploaded images are written to and served from.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    /// Maximum decoded size of an uploaded image.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Argon2id hash of the admin password (PHC string format).
    pub admin_password_hash: String,

    /// Session lifetime in seconds (default: 86400 = 24 hours).
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: i64,
}

/// Telegram order-notification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    /// Whether order notifications are sent at all.
    #[serde(default)]
    pub enabled: bool,

    /// Telegram bot token.
    #[serde(default)]
    pub telegram_bot_token: String,

    /// Chat ids the order summary is sent to.
    #[serde(default)]
    pub telegram_chat_ids: Vec<String>,

    /// Base URL for "open in admin" links in notification messages.
    #[serde(default)]
    pub admin_base_url: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            telegram_bot_token: String::new(),
            telegram_chat_ids: Vec::new(),
            admin_base_url: String::new(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_max_body_size() -> usize {
    10_485_760
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_uploads_dir() -> PathBuf {
    PathBuf::from("data/uploads")
}
fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_session_ttl() -> i64 {
    86400
}
fn default_cart_idle_ttl() -> i64 {
    86400
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with GARDEN__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("GARDEN").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds a config entirely from embedded defaults and overrides,
    /// without touching the filesystem.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            request_timeout_secs = 30
            max_body_size = 10485760
            cart_idle_ttl_secs = 86400

            [storage]
            data_dir = "data"
            uploads_dir = "data/uploads"
            max_upload_bytes = 5242880

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []

            [auth]
            admin_password_hash = ""
            session_ttl_secs = 86400

            [notifications]
            enabled = false
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        // Validation is skipped here so tests can build partial configs.
        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.auth.admin_password_hash.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "GARDEN__AUTH__ADMIN_PASSWORD_HASH environment variable must be set".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.auth.session_ttl_secs <= 0 {
            return Err(ConfigValidationError::InvalidValue(
                "session_ttl_secs must be positive".to_string(),
            ));
        }

        if self.server.cart_idle_ttl_secs <= 0 {
            return Err(ConfigValidationError::InvalidValue(
                "cart_idle_ttl_secs must be positive".to_string(),
            ));
        }

        if self.notifications.enabled && self.notifications.telegram_bot_token.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "notifications.telegram_bot_token is required when notifications are enabled"
                    .to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .expect("Invalid socket address")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: (&str, &str) = ("auth.admin_password_hash", "$argon2id$test");

    #[test]
    fn test_defaults_load() {
        let config = Config::load_for_test(&[HASH]).expect("Config should load");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.session_ttl_secs, 86400);
        assert_eq!(config.server.cart_idle_ttl_secs, 86400);
        assert_eq!(config.storage.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.logging.level, "info");
        assert!(!config.notifications.enabled);
    }

    #[test]
    fn test_overrides_apply() {
        let config =
            Config::load_for_test(&[HASH, ("server.port", "9100"), ("logging.level", "debug")])
                .expect("Config should load");

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_admin_hash_is_rejected() {
        let config = Config::load_for_test(&[]).expect("Config should load");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ADMIN_PASSWORD_HASH"));
    }

    #[test]
    fn test_enabled_notifications_require_a_token() {
        let config = Config::load_for_test(&[HASH, ("notifications.enabled", "true")])
            .expect("Config should load");

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("telegram_bot_token"));
    }

    #[test]
    fn test_socket_addr() {
        let config =
            Config::load_for_test(&[HASH, ("server.host", "127.0.0.1"), ("server.port", "3000")])
                .expect("Config should load");

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
