//! Server configuration from environment variables.
//!
//! | Variable         | Default           |
//! |------------------|-------------------|
//! | `HOST`           | `0.0.0.0`         |
//! | `PORT`           | `8080`            |
//! | `DATA_PATH`      | `data/teams.json` |
//! | `STATIC_DIR`     | `static`          |
//! | `ADMIN_PASSWORD` | `changeme`        |
//! | `SESSION_SECRET` | random per start  |
//! | `COOKIE_SECURE`  | `false`           |

use actix_web::cookie::Key;
use std::path::PathBuf;

/// Minimum length of `SESSION_SECRET`, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

pub const DEFAULT_ADMIN_PASSWORD: &str = "changeme";

/// Invalid environment configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    InvalidPort(String),
    SecretTooShort { len: usize },
    InvalidFlag { name: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(p) => write!(f, "PORT is not a valid port number: {}", p),
            ConfigError::SecretTooShort { len } => write!(
                f,
                "SESSION_SECRET must be at least {} bytes (got {})",
                MIN_SECRET_LEN, len
            ),
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{} must be true or false (got {})", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
    pub admin_password: String,
    /// `None` means a fresh key is generated at startup.
    pub session_secret: Option<String>,
    pub cookie_secure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_path: PathBuf::from("data/teams.json"),
            static_dir: PathBuf::from("static"),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            session_secret: None,
            cookie_secure: false,
        }
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(path) = lookup("DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(password) = lookup("ADMIN_PASSWORD") {
            config.admin_password = password;
        }
        if let Some(secret) = lookup("SESSION_SECRET") {
            if secret.len() < MIN_SECRET_LEN {
                return Err(ConfigError::SecretTooShort { len: secret.len() });
            }
            config.session_secret = Some(secret);
        }
        if let Some(value) = lookup("COOKIE_SECURE") {
            config.cookie_secure = parse_flag("COOKIE_SECURE", value)?;
        }
        Ok(config)
    }

    /// Key for signing and encrypting session cookies.
    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) => Key::derive_from(secret.as_bytes()),
            None => {
                log::warn!("SESSION_SECRET not set; sessions will not survive a restart");
                Key::generate()
            }
        }
    }

    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
