use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::ConfigError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_DATA_DIR: &str = "finance_app_data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub news_api_key: String,
    pub gemini_model: String,
    pub data_dir: PathBuf,
    pub storage_backend: StorageBackend,
    pub bind_addr: SocketAddr,
    pub news_page_size: usize,
    pub news_timeout: Duration,
    pub model_timeout: Duration,
    pub alert_cache_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let storage_backend = match lookup("STORAGE_BACKEND")
            .unwrap_or_else(|| "file".to_string())
            .to_lowercase()
            .as_str()
        {
            "file" => StorageBackend::File,
            "memory" => StorageBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    name: "STORAGE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            gemini_api_key: required("GEMINI_API_KEY")?,
            news_api_key: required("NEWS_API_KEY")?,
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            data_dir: lookup("FINANCEHUB_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            storage_backend,
            bind_addr: parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            news_page_size: parse_or(&lookup, "NEWS_PAGE_SIZE", 10)?,
            news_timeout: Duration::from_secs(parse_or(&lookup, "NEWS_TIMEOUT_SECS", 10)?),
            model_timeout: Duration::from_secs(parse_or(&lookup, "MODEL_TIMEOUT_SECS", 60)?),
            alert_cache_ttl: Duration::from_secs(parse_or(&lookup, "ALERT_CACHE_TTL_SECS", 600)?),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}
