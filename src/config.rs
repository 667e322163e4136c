use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "entries.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_TEMPLATES_GLOB: &str = "templates/**/*.html";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub pool_size: u32,
    pub templates_glob: String,
    pub static_dir: String,
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());
        let bind_address = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDRESS",
            value: bind_raw.clone(),
        })?;

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_POOL_SIZE",
                        value: raw,
                    });
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_address,
            pool_size,
            templates_glob: lookup("TEMPLATES_GLOB")
                .unwrap_or_else(|| DEFAULT_TEMPLATES_GLOB.into()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into()),
        })
    }
}
