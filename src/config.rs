use std::{env, fmt::Display, str::FromStr};

use anyhow::anyhow;
use log::{info, warn};

/// Where the client finds the API unless `CLINICA_API_URL` says otherwise.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub name: String,
    /// Takes precedence over the individual parts when set.
    pub url: Option<String>,
    pub pool_size: u32,
    pub connect_timeout_ms: u64,
}

impl DbConfig {
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None if self.password.is_empty() => format!(
                "mysql://{}@{}:{}/{}",
                self.user, self.host, self.port, self.name
            ),
            None => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<String>,
    pub db: DbConfig,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: try_load(&lookup, "BIND_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "3000")?,
            static_dir: lookup("STATIC_DIR").filter(|dir| !dir.is_empty()),
            db: DbConfig {
                host: try_load(&lookup, "DB_HOST", "localhost")?,
                user: try_load(&lookup, "DB_USER", "root")?,
                password: lookup("DB_PASS").unwrap_or_default(),
                port: try_load(&lookup, "DB_PORT", "3306")?,
                name: try_load(&lookup, "DB_NAME", "clinica")?,
                url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
                pool_size: try_load(&lookup, "DB_POOL_SIZE", "10")?,
                connect_timeout_ms: try_load(&lookup, "DB_CONNECT_TIMEOUT_MS", "30000")?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{} not set, using default: {}", key, default);
        default.to_string()
    });
    value.parse().map_err(|e| {
        warn!("Invalid {} value: {}", key, e);
        anyhow!("invalid {} value '{}': {}", key, value, e)
    })
}
